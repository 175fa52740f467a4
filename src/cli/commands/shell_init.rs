//! Shell init command implementation.
//!
//! `eval "$(shassert shell-init)"` defines `require`, `var_assert` and the
//! other helpers as shell functions.

use crate::cli::args::ShellInitArgs;
use crate::error::Result;
use crate::shell::{detect_shell, init_script, ShellType};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The shell-init command implementation.
pub struct ShellInitCommand {
    args: ShellInitArgs,
}

impl ShellInitCommand {
    /// Create a new shell-init command.
    pub fn new(args: ShellInitArgs) -> Self {
        Self { args }
    }

    fn shell(&self) -> Result<ShellType> {
        match self.args.shell {
            Some(shell) => Ok(shell),
            None => detect_shell(),
        }
    }
}

/// Path to this binary, falling back to its name on `PATH`.
fn executable_path() -> String {
    std::env::current_exe()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "shassert".to_string())
}

impl Command for ShellInitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let shell = self.shell()?;
        tracing::debug!("generating init script for {}", shell);
        ui.output(init_script(shell, &executable_path()).trim_end());
        Ok(CommandResult::success())
    }
}
