//! Random file command implementation.

use std::path::PathBuf;

use crate::cli::args::RandFileArgs;
use crate::config::ShassertConfig;
use crate::error::Result;
use crate::random::write_random_file;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The rand-file command implementation.
pub struct RandFileCommand {
    path: PathBuf,
    size: u64,
    force: bool,
}

impl RandFileCommand {
    /// Create a new rand-file command, filling the size from config when unset.
    pub fn new(args: RandFileArgs, config: &ShassertConfig) -> Self {
        Self {
            size: args.size.unwrap_or(config.random.file_size),
            path: args.path,
            force: args.force,
        }
    }
}

impl Command for RandFileCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        write_random_file(&mut rand::thread_rng(), &self.path, self.size, self.force)?;
        ui.success(&format!("wrote {} bytes to {}", self.size, self.path.display()));
        Ok(CommandResult::success())
    }
}
