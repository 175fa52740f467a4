//! Shell detection.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::ShassertError;

/// Shells with an init script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ShellType {
    Bash,
    Zsh,
}

impl ShellType {
    /// Parse shell type from an executable path such as `/usr/bin/zsh`.
    pub fn from_executable(exe: &str) -> Option<Self> {
        let name = Path::new(exe)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_lowercase();

        match name.as_str() {
            "bash" => Some(ShellType::Bash),
            "zsh" => Some(ShellType::Zsh),
            _ => None,
        }
    }

    /// Lowercase shell name.
    pub fn name(&self) -> &'static str {
        match self {
            ShellType::Bash => "bash",
            ShellType::Zsh => "zsh",
        }
    }

    /// Startup file the init line belongs in.
    pub fn rc_file(&self) -> &'static str {
        match self {
            ShellType::Bash => "~/.bashrc",
            ShellType::Zsh => "~/.zshrc",
        }
    }
}

impl fmt::Display for ShellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShellType {
    type Err = ShassertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_executable(s).ok_or_else(|| ShassertError::UnsupportedShell {
            shell: s.to_string(),
        })
    }
}

/// The login shell from `$SHELL`, falling back to `/bin/sh`.
pub fn shell_executable() -> PathBuf {
    std::env::var("SHELL")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/bin/sh"))
}

/// Detect the user's shell type.
pub fn detect_shell() -> Result<ShellType, ShassertError> {
    shell_executable().to_string_lossy().parse()
}

/// Check if running in a CI environment.
///
/// Checks common CI environment variables: `CI`, `GITHUB_ACTIONS`,
/// `GITLAB_CI`, `CIRCLECI`, `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    ["CI", "GITHUB_ACTIONS", "GITLAB_CI", "CIRCLECI", "TRAVIS", "JENKINS_URL"]
        .iter()
        .any(|var| std::env::var_os(var).is_some())
}
