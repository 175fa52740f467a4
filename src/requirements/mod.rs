//! Precondition checks.
//!
//! Each checker decides pass/fail for one kind of requirement and returns a
//! [`CheckResult`]. Batch checkers stop at the first failure. Checkers reach
//! the outside world only through small collaborator traits, so they hold no
//! state of their own and are safe to call from any thread.
//!
//! # Modules
//!
//! - [`command`] - Command resolution (`require`)
//! - [`vars`] - Variable definedness (`var_assert`)
//! - [`range`] - Range specifiers (`num_in_range`)
//! - [`file`] - File existence and size (`file_assert`)
//! - [`process`] - Process liveness (`pid_alive`)
//! - [`checker`] - Requirement routing
//! - [`manifest`] - YAML requirement manifests
//! - [`status`] - Check outcome types

pub mod checker;
pub mod command;
pub mod file;
pub mod manifest;
pub mod process;
pub mod range;
pub mod status;
pub mod vars;

pub use checker::{Checker, Requirement};
pub use command::{require, CommandResolver, CommandTable, ResolveMode};
pub use file::{file_assert, FileMetadata, LocalFs, SizeLimits, DEFAULT_MAX_FILE_SIZE};
pub use manifest::{load_manifest, Manifest};
pub use process::pid_alive;
pub use range::{num_in_range, Range};
pub use status::{CheckFailure, CheckResult, FailureKind};
pub use vars::{var_assert, Bindings, ProcessEnv, VarLookup, VarMode};
