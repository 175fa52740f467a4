//! File assertion command implementation.

use crate::cli::args::FileAssertArgs;
use crate::config::ShassertConfig;
use crate::error::Result;
use crate::requirements::{file_assert, LocalFs, SizeLimits};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The file-assert command implementation.
pub struct FileAssertCommand {
    args: FileAssertArgs,
    default_max: u64,
}

impl FileAssertCommand {
    /// Create a new file-assert command.
    pub fn new(args: FileAssertArgs, config: &ShassertConfig) -> Self {
        Self {
            args,
            default_max: config.max_file_size,
        }
    }
}

impl Command for FileAssertCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let limits = SizeLimits::new(self.args.minsize, self.args.maxsize);
        let outcome = file_assert(&LocalFs, &self.args.paths, limits, self.default_max);
        Ok(CommandResult::from_check(ui, outcome, || {
            format!(
                "{} file(s) within {}",
                self.args.paths.len(),
                limits.effective_range(self.default_max)
            )
        }))
    }
}
