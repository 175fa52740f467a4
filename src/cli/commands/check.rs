//! Manifest check command implementation.
//!
//! The `shassert check` command evaluates every requirement listed in a
//! YAML manifest, stopping at the first failure.

use std::path::{Path, PathBuf};

use crate::cli::args::CheckArgs;
use crate::config::ShassertConfig;
use crate::error::Result;
use crate::requirements::manifest::DEFAULT_MANIFEST;
use crate::requirements::{load_manifest, Checker, CommandTable, LocalFs, ProcessEnv};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    manifest: PathBuf,
    table: CommandTable,
    default_max_file_size: u64,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(cwd: &Path, args: CheckArgs, config: &ShassertConfig) -> Self {
        let manifest = cwd.join(args.file.unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST)));
        Self {
            manifest,
            table: CommandTable::from_env().with_shell_names(config.shell_names.iter()),
            default_max_file_size: config.max_file_size,
        }
    }

    /// Get the manifest path.
    pub fn manifest(&self) -> &Path {
        &self.manifest
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let manifest = load_manifest(&self.manifest)?;
        tracing::debug!(
            "loaded {} requirement(s) from {}",
            manifest.requirements.len(),
            self.manifest.display()
        );

        let checker = Checker::new(&self.table, &LocalFs, &ProcessEnv)
            .with_default_max_file_size(self.default_max_file_size);
        let outcome = checker.check_all(&manifest.requirements);
        Ok(CommandResult::from_check(ui, outcome, || {
            format!(
                "{} requirement(s) satisfied ({})",
                manifest.requirements.len(),
                self.manifest.display()
            )
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShassertError;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn run(dir: &Path, file: Option<&str>) -> Result<(CommandResult, MockUI)> {
        let args = CheckArgs {
            file: file.map(PathBuf::from),
        };
        let mut ui = MockUI::new();
        let result = CheckCommand::new(dir, args, &ShassertConfig::default()).execute(&mut ui)?;
        Ok((result, ui))
    }

    #[test]
    fn default_manifest_is_in_cwd() {
        let cmd = CheckCommand::new(
            Path::new("/work"),
            CheckArgs::default(),
            &ShassertConfig::default(),
        );
        assert_eq!(cmd.manifest(), Path::new("/work/requirements.yml"));
    }

    #[test]
    fn passing_manifest() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("data.txt"), "hello").unwrap();
        fs::write(
            temp.path().join("requirements.yml"),
            format!(
                r#"
requirements:
  - kind: file
    paths: ["{}"]
    min_size: 1
  - kind: range
    value: 5
    range: "1:10"
"#,
                temp.path().join("data.txt").display()
            ),
        )
        .unwrap();

        let (result, ui) = run(temp.path(), None).unwrap();
        assert!(result.success);
        assert!(ui.has_success("2 requirement(s) satisfied"));
    }

    #[test]
    fn first_failure_is_reported() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("reqs.yml"),
            r#"
requirements:
  - kind: range
    value: 50
    range: "1:10"
  - kind: file
    paths: ["/nope"]
"#,
        )
        .unwrap();

        let (result, ui) = run(temp.path(), Some("reqs.yml")).unwrap();
        assert_eq!(result.exit_code, 1);
        assert_eq!(ui.errors().len(), 1);
        assert!(ui.has_error("50 is not in range 1:10"));
    }

    #[test]
    fn missing_manifest_is_an_error() {
        let temp = TempDir::new().unwrap();
        let err = run(temp.path(), None).unwrap_err();
        assert!(matches!(err, ShassertError::ManifestError { .. }));
    }
}
