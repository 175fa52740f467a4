//! Requirement evaluation.
//!
//! A [`Requirement`] names one kind of check together with its targets and
//! constraints. The [`Checker`] borrows the collaborators each checker needs
//! and routes a requirement to the right one.

use std::path::PathBuf;

use serde::Deserialize;

use super::command::{require, CommandResolver, ResolveMode};
use super::file::{file_assert, FileMetadata, SizeLimits, DEFAULT_MAX_FILE_SIZE};
use super::process::pid_alive;
use super::range::{check_range, Range};
use super::status::CheckResult;
use super::vars::{var_assert, VarLookup, VarMode};

/// One precondition to verify.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Requirement {
    /// Every name must resolve to something invocable.
    Command {
        names: Vec<String>,
        #[serde(default)]
        executable: bool,
    },
    /// Every variable must be declared (or non-empty).
    Variable {
        names: Vec<String>,
        #[serde(default)]
        non_empty: bool,
    },
    /// Every path must be a regular file within the size bounds.
    File {
        paths: Vec<PathBuf>,
        #[serde(default)]
        min_size: Option<u64>,
        #[serde(default)]
        max_size: Option<u64>,
    },
    /// The value must lie within the range.
    #[serde(rename = "range")]
    NumericRange { value: i64, range: Range },
    /// Every PID must name a running process.
    Process { pids: Vec<i32> },
}

impl Requirement {
    /// Short label used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Command { .. } => "command",
            Self::Variable { .. } => "variable",
            Self::File { .. } => "file",
            Self::NumericRange { .. } => "range",
            Self::Process { .. } => "process",
        }
    }
}

/// Evaluates requirements against borrowed collaborators.
///
/// Holds no mutable state; the same checker can evaluate any number of
/// requirements.
pub struct Checker<'a> {
    commands: &'a dyn CommandResolver,
    files: &'a dyn FileMetadata,
    vars: &'a dyn VarLookup,
    default_max_file_size: u64,
}

impl<'a> Checker<'a> {
    /// Create a checker over the given collaborators.
    pub fn new(
        commands: &'a dyn CommandResolver,
        files: &'a dyn FileMetadata,
        vars: &'a dyn VarLookup,
    ) -> Self {
        Self {
            commands,
            files,
            vars,
            default_max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }

    /// Override the upper size bound used when a file requirement sets none.
    pub fn with_default_max_file_size(mut self, bytes: u64) -> Self {
        self.default_max_file_size = bytes;
        self
    }

    /// Evaluate a single requirement.
    pub fn check(&self, requirement: &Requirement) -> CheckResult {
        tracing::debug!("checking {} requirement", requirement.kind());
        match requirement {
            Requirement::Command { names, executable } => {
                let mode = if *executable {
                    ResolveMode::Executable
                } else {
                    ResolveMode::Any
                };
                require(self.commands, names, mode)
            }
            Requirement::Variable { names, non_empty } => {
                let mode = if *non_empty {
                    VarMode::NonEmpty
                } else {
                    VarMode::Declared
                };
                var_assert(self.vars, names, mode)
            }
            Requirement::File {
                paths,
                min_size,
                max_size,
            } => file_assert(
                self.files,
                paths,
                SizeLimits::new(*min_size, *max_size),
                self.default_max_file_size,
            ),
            Requirement::NumericRange { value, range } => check_range(*value, range),
            Requirement::Process { pids } => pid_alive(pids),
        }
    }

    /// Evaluate requirements in order, stopping at the first failure.
    pub fn check_all(&self, requirements: &[Requirement]) -> CheckResult {
        requirements.iter().try_for_each(|r| self.check(r))
    }
}
