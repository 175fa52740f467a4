//! Error types for shassert operations.
//!
//! This module defines [`ShassertError`], the error type for everything that
//! is not a check outcome, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A check that does not pass is not an error: it is a
//!   [`CheckFailure`](crate::requirements::CheckFailure) returned to the caller
//! - Use `ShassertError` for configuration, manifest and I/O problems
//! - Use `anyhow::Error` (via `ShassertError::Other`) for context-wrapped I/O

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for shassert operations.
#[derive(Debug, Error)]
pub enum ShassertError {
    /// Explicitly requested configuration file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse a configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Requirement manifest is missing or invalid.
    #[error("Invalid requirement manifest {path}: {message}")]
    ManifestError { path: PathBuf, message: String },

    /// Refusing to overwrite an existing file.
    #[error("Refusing to overwrite existing path: {path} (use --force)")]
    FileExists { path: PathBuf },

    /// The requested shell has no init script.
    #[error("Unsupported shell '{shell}': expected bash or zsh")]
    UnsupportedShell { shell: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for shassert operations.
pub type Result<T> = std::result::Result<T, ShassertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = ShassertError::ConfigNotFound {
            path: PathBuf::from("/foo/config.yml"),
        };
        assert!(err.to_string().contains("/foo/config.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = ShassertError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn manifest_error_displays_path_and_message() {
        let err = ShassertError::ManifestError {
            path: PathBuf::from("requirements.yml"),
            message: "unknown variant `widget`".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("requirements.yml"));
        assert!(msg.contains("widget"));
    }

    #[test]
    fn file_exists_mentions_force() {
        let err = ShassertError::FileExists {
            path: PathBuf::from("/tmp/blob"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/blob"));
        assert!(msg.contains("--force"));
    }

    #[test]
    fn unsupported_shell_displays_name() {
        let err = ShassertError::UnsupportedShell {
            shell: "tcsh".into(),
        };
        assert!(err.to_string().contains("tcsh"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ShassertError = io_err.into();
        assert!(matches!(err, ShassertError::Io(_)));
    }

    #[test]
    fn anyhow_error_is_transparent() {
        let err: ShassertError = anyhow::anyhow!("writing /tmp/x").into();
        assert_eq!(err.to_string(), "writing /tmp/x");
    }
}
