//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Check commands report through
//! [`CommandResult::from_check`] so every failure becomes one diagnostic on
//! stderr and exit code 1.

pub mod check;
pub mod completions;
pub mod config;
pub mod dispatcher;
pub mod file_assert;
pub mod num_in_range;
pub mod pid_alive;
pub mod rand_file;
pub mod rand_str;
pub mod require;
pub mod shell_init;
pub mod var_assert;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
