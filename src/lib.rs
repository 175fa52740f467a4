//! Shassert - precondition checks for shell scripts.
//!
//! Small, composable assertions a script runs before doing real work: that
//! commands resolve, variables are set, files exist with a sane size,
//! numbers fall within a range and processes are alive. Each check stops at
//! the first failure and reports it as a [`requirements::CheckFailure`].
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and layering
//! - [`error`] - Error types and result aliases
//! - [`random`] - Random strings and files for test fixtures
//! - [`requirements`] - The checks themselves
//! - [`shell`] - Shell detection and init scripts
//! - [`ui`] - Diagnostics and output
//!
//! # Example
//!
//! ```
//! use shassert::requirements::{num_in_range, var_assert, Bindings, VarMode};
//!
//! assert!(num_in_range("5", "1:10").is_ok());
//! assert!(num_in_range("11", "1:10").is_err());
//!
//! let vars = Bindings::isolated().with("DEPLOY_ENV", "staging");
//! assert!(var_assert(&vars, &["DEPLOY_ENV".to_string()], VarMode::NonEmpty).is_ok());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod random;
pub mod requirements;
pub mod shell;
pub mod ui;

pub use error::{Result, ShassertError};
