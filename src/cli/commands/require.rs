//! Require command implementation.
//!
//! The `shassert require` command checks that every name resolves to
//! something the shell could invoke.

use crate::cli::args::RequireArgs;
use crate::config::ShassertConfig;
use crate::error::Result;
use crate::requirements::{require, CommandTable, ResolveMode};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The require command implementation.
pub struct RequireCommand {
    args: RequireArgs,
    table: CommandTable,
}

impl RequireCommand {
    /// Create a require command resolving against `PATH` plus the shell
    /// names from the environment and config.
    pub fn new(args: RequireArgs, config: &ShassertConfig) -> Self {
        let table = CommandTable::from_env().with_shell_names(config.shell_names.iter());
        Self::with_table(args, table)
    }

    /// Create a require command over an explicit command table.
    pub fn with_table(args: RequireArgs, table: CommandTable) -> Self {
        Self { args, table }
    }

    fn mode(&self) -> ResolveMode {
        if self.args.executable {
            ResolveMode::Executable
        } else {
            ResolveMode::Any
        }
    }
}

impl Command for RequireCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mode = self.mode();
        let outcome = require(&self.table, &self.args.names, mode);
        Ok(CommandResult::from_check(ui, outcome, || {
            format!("found {} ({})", self.args.names.join(", "), mode)
        }))
    }
}
