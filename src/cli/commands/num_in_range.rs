//! Numeric range command implementation.

use crate::cli::args::NumInRangeArgs;
use crate::error::Result;
use crate::requirements::num_in_range;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The num-in-range command implementation.
pub struct NumInRangeCommand {
    args: NumInRangeArgs,
}

impl NumInRangeCommand {
    /// Create a new num-in-range command.
    pub fn new(args: NumInRangeArgs) -> Self {
        Self { args }
    }
}

impl Command for NumInRangeCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        // Missing arguments behave like empty ones.
        let value = self.args.value.as_deref().unwrap_or("");
        let spec = self.args.range.as_deref().unwrap_or("");
        let outcome = num_in_range(value, spec);
        Ok(CommandResult::from_check(ui, outcome, || {
            format!("{} is in range {}", value, spec)
        }))
    }
}
