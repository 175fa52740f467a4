//! Process liveness command implementation.

use crate::cli::args::PidAliveArgs;
use crate::error::Result;
use crate::requirements::process::{check_pid, parse_pid};
use crate::requirements::{CheckFailure, CheckResult};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The pid-alive command implementation.
pub struct PidAliveCommand {
    args: PidAliveArgs,
}

impl PidAliveCommand {
    /// Create a new pid-alive command.
    pub fn new(args: PidAliveArgs) -> Self {
        Self { args }
    }

    /// Parse and probe in argument order so the first failure is reported.
    fn check(&self) -> CheckResult {
        if self.args.pids.is_empty() {
            return Err(CheckFailure::NoTargets { what: "pid" });
        }
        self.args
            .pids
            .iter()
            .try_for_each(|raw| check_pid(parse_pid(raw)?))
    }
}

impl Command for PidAliveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let outcome = self.check();
        Ok(CommandResult::from_check(ui, outcome, || {
            format!("running: {}", self.args.pids.join(", "))
        }))
    }
}
