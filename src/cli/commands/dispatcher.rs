//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::config::ShassertConfig;
use crate::error::Result;
use crate::requirements::CheckResult;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for diagnostics and generated output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Report a check outcome and convert it to a result.
    ///
    /// A failure becomes one diagnostic and exit code 1. `passed` is only
    /// built when the check succeeds.
    pub fn from_check<F>(ui: &mut dyn UserInterface, outcome: CheckResult, passed: F) -> Self
    where
        F: FnOnce() -> String,
    {
        match outcome {
            Ok(()) => {
                ui.success(&passed());
                Self::success()
            }
            Err(failure) => {
                tracing::debug!("check failed ({:?}): {}", failure.kind(), failure);
                ui.error(&failure.to_string());
                Self::failure(1)
            }
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    cwd: PathBuf,
    config: ShassertConfig,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given working directory and config.
    pub fn new(cwd: PathBuf, config: ShassertConfig) -> Self {
        Self { cwd, config }
    }

    /// Get the working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Get the resolved configuration.
    pub fn config(&self) -> &ShassertConfig {
        &self.config
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Require(args) => {
                let cmd = super::require::RequireCommand::new(args.clone(), &self.config);
                cmd.execute(ui)
            }
            Commands::FileAssert(args) => {
                let cmd = super::file_assert::FileAssertCommand::new(args.clone(), &self.config);
                cmd.execute(ui)
            }
            Commands::NumInRange(args) => {
                let cmd = super::num_in_range::NumInRangeCommand::new(args.clone());
                cmd.execute(ui)
            }
            Commands::VarAssert(args) => {
                let cmd = super::var_assert::VarAssertCommand::new(args.clone());
                cmd.execute(ui)
            }
            Commands::PidAlive(args) => {
                let cmd = super::pid_alive::PidAliveCommand::new(args.clone());
                cmd.execute(ui)
            }
            Commands::RandStr(args) => {
                let cmd = super::rand_str::RandStrCommand::new(args.clone(), &self.config);
                cmd.execute(ui)
            }
            Commands::RandFile(args) => {
                let cmd = super::rand_file::RandFileCommand::new(args.clone(), &self.config);
                cmd.execute(ui)
            }
            Commands::Check(args) => {
                let cmd = super::check::CheckCommand::new(&self.cwd, args.clone(), &self.config);
                cmd.execute(ui)
            }
            Commands::ShellInit(args) => {
                let cmd = super::shell_init::ShellInitCommand::new(args.clone());
                cmd.execute(ui)
            }
            Commands::Config(args) => {
                let cmd = super::config::ConfigCommand::new(
                    &self.cwd,
                    cli.config.clone(),
                    args.clone(),
                    &self.config,
                );
                cmd.execute(ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}
