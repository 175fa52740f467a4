//! User-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for styled output on a terminal
//! - [`NonInteractiveUI`] for pipes, scripts and CI
//! - [`MockUI`] for capturing output in tests
//!
//! Error diagnostics always go to stderr so scripted callers can separate
//! them from generated data on stdout.
//!
//! # Example
//!
//! ```
//! use shassert::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.success("all checks passed");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::{Channel, MockUI};
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, ShassertTheme, Tone};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a success message (stdout, only in verbose mode).
    fn success(&mut self, msg: &str);

    /// Display an error diagnostic (stderr, always shown).
    fn error(&mut self, msg: &str);

    /// Emit generated data (stdout, always shown, never styled).
    fn output(&mut self, data: &str);
}
