//! Command resolution and the `require` check.
//!
//! A standalone binary cannot see the aliases and functions of the shell
//! that invoked it, so resolution is split in two:
//!
//! - search-path executables are found by walking `PATH` directly
//! - shell names (aliases, functions, builtins, keywords) are a set handed in
//!   by the host, usually through `SHASSERT_SHELL_NAMES` set by the
//!   `shell-init` glue
//!
//! # Example
//!
//! ```
//! use shassert::requirements::command::{require, CommandTable, ResolveMode};
//!
//! let table = CommandTable::new(Vec::new()).with_shell_names(["ll"]);
//! assert!(require(&table, &["ll".to_string()], ResolveMode::Any).is_ok());
//! assert!(require(&table, &["ll".to_string()], ResolveMode::Executable).is_err());
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

use super::status::{CheckFailure, CheckResult};

/// Environment variable carrying whitespace-separated shell names.
pub const SHELL_NAMES_ENV: &str = "SHASSERT_SHELL_NAMES";

/// Builtins and keywords common to POSIX sh, bash and zsh.
const SHELL_BUILTINS: &[&str] = &[
    ".", ":", "[", "[[", "alias", "bg", "break", "builtin", "case", "cd", "command", "continue",
    "declare", "do", "done", "echo", "elif", "else", "esac", "eval", "exec", "exit", "export",
    "false", "fc", "fg", "fi", "for", "function", "getopts", "hash", "history", "if", "in",
    "jobs", "kill", "let", "local", "printf", "pwd", "read", "readonly", "return", "select",
    "set", "shift", "source", "test", "then", "time", "times", "trap", "true", "type",
    "typeset", "ulimit", "umask", "unalias", "unset", "until", "wait", "while",
];

/// How a command name may be satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolveMode {
    /// Aliases, functions, builtins and search-path executables all count.
    #[default]
    Any,
    /// Only a file on the search path counts.
    Executable,
}

impl fmt::Display for ResolveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("any invocable"),
            Self::Executable => f.write_str("search-path executable"),
        }
    }
}

/// How a command name was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Known to the shell as an alias, function, builtin or keyword.
    ShellName,
    /// An executable file.
    Executable(PathBuf),
}

/// Lookup from command name to resolution.
pub trait CommandResolver {
    /// Resolve `name` under `mode`, or `None` if it cannot be invoked.
    fn resolve(&self, name: &str, mode: ResolveMode) -> Option<Resolution>;
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that is a regular file and executable. Does not
/// shell out to `which` or `type`.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(tool);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Split a whitespace-separated list of shell names.
pub fn parse_shell_names(raw: &str) -> impl Iterator<Item = &str> {
    raw.split_whitespace()
}

/// Search path plus the set of names the shell knows about.
#[derive(Debug, Clone, Default)]
pub struct CommandTable {
    path: Vec<PathBuf>,
    shell_names: BTreeSet<String>,
}

impl CommandTable {
    /// Create a table over the given search path with the builtin names preloaded.
    pub fn new(path: Vec<PathBuf>) -> Self {
        Self {
            path,
            shell_names: SHELL_BUILTINS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Build a table from the process environment: `PATH` and
    /// [`SHELL_NAMES_ENV`].
    pub fn from_env() -> Self {
        let table = Self::new(parse_system_path());
        match std::env::var(SHELL_NAMES_ENV) {
            Ok(raw) => table.with_shell_names(parse_shell_names(&raw)),
            Err(_) => table,
        }
    }

    /// Add shell names (aliases, functions, ...).
    pub fn with_shell_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.shell_names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Whether `name` is a known shell name.
    pub fn is_shell_name(&self, name: &str) -> bool {
        self.shell_names.contains(name)
    }
}

impl CommandResolver for CommandTable {
    fn resolve(&self, name: &str, mode: ResolveMode) -> Option<Resolution> {
        if name.contains('/') {
            let path = Path::new(name);
            return (path.is_file() && is_executable(path))
                .then(|| Resolution::Executable(path.to_path_buf()));
        }

        if mode == ResolveMode::Any && self.is_shell_name(name) {
            return Some(Resolution::ShellName);
        }

        resolve_tool_path(name, &self.path).map(Resolution::Executable)
    }
}

/// Confirm every name resolves under `mode`.
///
/// Stops at the first name that does not resolve.
pub fn require<R>(resolver: &R, names: &[String], mode: ResolveMode) -> CheckResult
where
    R: CommandResolver + ?Sized,
{
    if names.is_empty() {
        return Err(CheckFailure::NoTargets {
            what: "command names",
        });
    }

    for name in names {
        if name.is_empty() {
            return Err(CheckFailure::InvalidName {
                what: "command",
                name: name.clone(),
            });
        }
        match resolver.resolve(name, mode) {
            Some(resolution) => tracing::debug!("{} resolved as {:?}", name, resolution),
            None => {
                return Err(CheckFailure::CommandNotFound {
                    name: name.clone(),
                    mode,
                })
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Create a fake binary at a path (creates parent dirs as needed).
    fn create_fake_binary(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "#!/bin/sh\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
        }
    }

    /// Create a non-executable file at a path.
    #[cfg(unix)]
    fn create_non_executable_file(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "not executable").unwrap();
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o644)).unwrap();
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn resolve_tool_path_finds_first_match() {
        let temp = TempDir::new().unwrap();
        let dir_a = temp.path().join("a");
        let dir_b = temp.path().join("b");
        create_fake_binary(&dir_a.join("git"));
        create_fake_binary(&dir_b.join("git"));

        let result = resolve_tool_path("git", &[dir_a.clone(), dir_b]);
        assert_eq!(result, Some(dir_a.join("git")));
    }

    #[test]
    fn resolve_tool_path_returns_none_when_not_found() {
        let temp = TempDir::new().unwrap();
        let result = resolve_tool_path("git", &[temp.path().to_path_buf()]);
        assert!(result.is_none());
    }

    #[test]
    fn resolve_tool_path_skips_directories() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("tool")).unwrap();
        assert!(resolve_tool_path("tool", &[temp.path().to_path_buf()]).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn resolve_tool_path_skips_non_executable() {
        let temp = TempDir::new().unwrap();
        let dir_a = temp.path().join("a");
        let dir_b = temp.path().join("b");
        create_non_executable_file(&dir_a.join("git"));
        create_fake_binary(&dir_b.join("git"));

        let result = resolve_tool_path("git", &[dir_a, dir_b.clone()]);
        assert_eq!(result, Some(dir_b.join("git")));
    }

    #[test]
    fn is_executable_returns_false_for_nonexistent_file() {
        assert!(!is_executable(Path::new("/nonexistent/path/to/file")));
    }

    #[test]
    fn default_mode_accepts_shell_names() {
        let table = CommandTable::new(vec![]).with_shell_names(["ll", "gst"]);
        assert!(require(&table, &names(&["ll", "gst", "cd"]), ResolveMode::Any).is_ok());
    }

    #[test]
    fn executable_mode_rejects_shell_only_names() {
        let table = CommandTable::new(vec![]).with_shell_names(["ll"]);
        let err = require(&table, &names(&["ll"]), ResolveMode::Executable).unwrap_err();
        assert_eq!(
            err,
            CheckFailure::CommandNotFound {
                name: "ll".into(),
                mode: ResolveMode::Executable,
            }
        );
    }

    #[test]
    fn executable_mode_accepts_search_path_binary() {
        let temp = TempDir::new().unwrap();
        create_fake_binary(&temp.path().join("mytool"));
        let table = CommandTable::new(vec![temp.path().to_path_buf()]);

        assert!(require(&table, &names(&["mytool"]), ResolveMode::Executable).is_ok());
        assert!(require(&table, &names(&["mytool"]), ResolveMode::Any).is_ok());
    }

    #[test]
    fn short_circuits_on_first_missing() {
        let temp = TempDir::new().unwrap();
        create_fake_binary(&temp.path().join("present"));
        let table = CommandTable::new(vec![temp.path().to_path_buf()]);

        let err = require(
            &table,
            &names(&["present", "missing-one", "missing-two"]),
            ResolveMode::Any,
        )
        .unwrap_err();
        assert!(err.to_string().contains("missing-one"));
        assert!(!err.to_string().contains("missing-two"));
    }

    #[test]
    fn path_names_resolve_directly() {
        let temp = TempDir::new().unwrap();
        let script = temp.path().join("run.sh");
        create_fake_binary(&script);
        let table = CommandTable::new(vec![]);
        let name = script.to_string_lossy().to_string();

        assert_eq!(
            table.resolve(&name, ResolveMode::Executable),
            Some(Resolution::Executable(script))
        );
        assert!(table
            .resolve("/nonexistent/run.sh", ResolveMode::Any)
            .is_none());
    }

    #[test]
    fn empty_name_list_is_malformed() {
        let table = CommandTable::new(vec![]);
        let err = require(&table, &[], ResolveMode::Any).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn empty_name_is_malformed() {
        let table = CommandTable::new(vec![]);
        let err = require(&table, &names(&[""]), ResolveMode::Any).unwrap_err();
        assert!(matches!(err, CheckFailure::InvalidName { .. }));
    }

    #[test]
    fn parse_shell_names_splits_on_whitespace() {
        let parsed: Vec<&str> = parse_shell_names(" ll\tgst\n  la ").collect();
        assert_eq!(parsed, vec!["ll", "gst", "la"]);
    }

    #[test]
    fn builtins_are_preloaded() {
        let table = CommandTable::new(vec![]);
        assert!(table.is_shell_name("cd"));
        assert!(table.is_shell_name("export"));
        assert!(!table.is_shell_name("git"));
    }
}
