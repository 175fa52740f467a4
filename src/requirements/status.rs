//! Check outcome types.
//!
//! Every checker returns a [`CheckResult`]. A failure carries enough context
//! to render the diagnostic written to the error stream; nothing else
//! survives the call.

use std::path::PathBuf;

use thiserror::Error;

use super::command::ResolveMode;
use super::range::Range;

/// Outcome of a single check.
pub type CheckResult = std::result::Result<(), CheckFailure>;

/// Broad category of a failed check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The input itself was unusable (bad specifier, missing arguments).
    Malformed,
    /// The input was fine but the thing it names is missing or out of bounds.
    NotFound,
}

/// Why a check did not pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckFailure {
    /// A batch check was given nothing to check.
    #[error("no {what} provided")]
    NoTargets { what: &'static str },

    /// Range specifier is not `<min>:<max>`.
    #[error("malformed range '{spec}': expected MIN:MAX with optional unsigned bounds")]
    MalformedRange { spec: String },

    /// Range check was handed an empty value.
    #[error("no value provided")]
    EmptyValue,

    /// Value is not an integer.
    #[error("'{value}' is not an integer")]
    InvalidValue { value: String },

    /// Name is not usable for this kind of lookup.
    #[error("invalid {what} name '{name}'")]
    InvalidName { what: &'static str, name: String },

    /// PID is not a positive integer.
    #[error("invalid pid '{value}'")]
    InvalidPid { value: String },

    /// Command could not be resolved.
    #[error("command not found: {name} ({mode})")]
    CommandNotFound { name: String, mode: ResolveMode },

    /// Path does not exist or is not a regular file.
    #[error("file not found: {path}")]
    FileMissing { path: PathBuf },

    /// File exists but its size is outside the allowed range.
    #[error("file size out of range: {path} is {size} bytes, expected {range}")]
    FileSizeOutOfRange {
        path: PathBuf,
        size: u64,
        range: Range,
    },

    /// Value lies outside the range.
    #[error("{value} is not in range {range}")]
    OutOfRange { value: i64, range: Range },

    /// Variable is not declared.
    #[error("variable not set: {name}")]
    VariableUnset { name: String },

    /// Variable is declared but empty.
    #[error("variable is empty: {name}")]
    VariableEmpty { name: String },

    /// No process with this id.
    #[error("process not running: {pid}")]
    ProcessNotRunning { pid: i32 },
}

impl CheckFailure {
    /// Category of this failure.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::NoTargets { .. }
            | Self::MalformedRange { .. }
            | Self::EmptyValue
            | Self::InvalidValue { .. }
            | Self::InvalidName { .. }
            | Self::InvalidPid { .. } => FailureKind::Malformed,
            Self::CommandNotFound { .. }
            | Self::FileMissing { .. }
            | Self::FileSizeOutOfRange { .. }
            | Self::OutOfRange { .. }
            | Self::VariableUnset { .. }
            | Self::VariableEmpty { .. }
            | Self::ProcessNotRunning { .. } => FailureKind::NotFound,
        }
    }

    /// Whether the failure came from unusable input.
    pub fn is_malformed(&self) -> bool {
        self.kind() == FailureKind::Malformed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_targets_message() {
        let failure = CheckFailure::NoTargets { what: "path" };
        assert_eq!(failure.to_string(), "no path provided");
        assert!(failure.is_malformed());
    }

    #[test]
    fn command_not_found_names_mode() {
        let failure = CheckFailure::CommandNotFound {
            name: "ll".into(),
            mode: ResolveMode::Executable,
        };
        let msg = failure.to_string();
        assert!(msg.contains("ll"));
        assert!(msg.contains("search-path executable"));
        assert_eq!(failure.kind(), FailureKind::NotFound);
    }

    #[test]
    fn file_size_message_includes_range() {
        let failure = CheckFailure::FileSizeOutOfRange {
            path: PathBuf::from("small.bin"),
            size: 5,
            range: Range::new(Some(10), None),
        };
        let msg = failure.to_string();
        assert!(msg.contains("small.bin"));
        assert!(msg.contains("5 bytes"));
        assert!(msg.contains("10:"));
    }

    #[test]
    fn malformed_range_is_malformed() {
        let failure = CheckFailure::MalformedRange { spec: "abc".into() };
        assert!(failure.is_malformed());
        assert!(failure.to_string().contains("abc"));
    }
}
