//! Config command implementation.
//!
//! The `shassert config` command shows resolved configuration.

use std::path::{Path, PathBuf};

use crate::cli::args::ConfigArgs;
use crate::config::{ConfigPaths, ShassertConfig};
use crate::error::{Result, ShassertError};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    cwd: PathBuf,
    config_override: Option<PathBuf>,
    args: ConfigArgs,
    config: ShassertConfig,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(
        cwd: &Path,
        config_override: Option<PathBuf>,
        args: ConfigArgs,
        config: &ShassertConfig,
    ) -> Self {
        Self {
            cwd: cwd.to_path_buf(),
            config_override,
            args,
            config: config.clone(),
        }
    }

    /// Files the configuration was read from, lowest precedence first.
    pub fn sources(&self) -> Vec<PathBuf> {
        match &self.config_override {
            Some(path) => vec![path.clone()],
            None => ConfigPaths::discover(&self.cwd)
                .all_existing()
                .into_iter()
                .cloned()
                .collect(),
        }
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let sources = self.sources();

        if self.args.paths {
            for path in &sources {
                ui.output(&path.display().to_string());
            }
            return Ok(CommandResult::success());
        }

        if sources.is_empty() {
            ui.output("# no config files found; showing defaults");
        }
        for path in &sources {
            ui.output(&format!("# {}", path.display()));
        }

        let yaml =
            serde_yaml::to_string(&self.config).map_err(|e| ShassertError::Other(e.into()))?;
        ui.output(yaml.trim_end());

        Ok(CommandResult::success())
    }
}
