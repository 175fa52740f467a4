//! Configuration file discovery and loading.
//!
//! Files are layered in this order, later overriding earlier:
//!
//! 1. User global config (`<config_dir>/shassert/config.yml`)
//! 2. Project config (`.shassert.yml` in the working directory)
//!
//! Mappings merge key by key, sequences and scalars are replaced, and an
//! explicit `null` drops the inherited key so its default applies again.
//! An explicit `--config` file bypasses discovery entirely.

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};

use crate::config::schema::ShassertConfig;
use crate::error::{Result, ShassertError};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "SHASSERT_CONFIG";

/// Project config file name.
pub const PROJECT_CONFIG: &str = ".shassert.yml";

/// Config files found for a working directory.
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// User's global config, if it exists.
    pub user_global: Option<PathBuf>,

    /// Project config in the working directory, if it exists.
    pub project: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given working directory.
    pub fn discover(cwd: &Path) -> Self {
        Self {
            user_global: dirs::config_dir()
                .map(|dir| dir.join("shassert").join("config.yml"))
                .filter(|p| usable(p)),
            project: Some(cwd.join(PROJECT_CONFIG)).filter(|p| usable(p)),
        }
    }

    /// Existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.user_global.iter().chain(self.project.iter()).collect()
    }
}

/// Whether `path` is a config file that can be read.
fn usable(path: &Path) -> bool {
    if path.is_file() {
        return true;
    }
    if path.exists() {
        tracing::warn!("ignoring {}: not a regular file", path.display());
    }
    false
}

/// Overlay `top` onto `base`.
fn merge_value(base: Value, top: Value) -> Value {
    match (base, top) {
        (Value::Mapping(mut merged), Value::Mapping(top)) => {
            for (key, value) in top {
                if value.is_null() {
                    merged.remove(&key);
                    continue;
                }
                let value = match merged.remove(&key) {
                    Some(inherited) => merge_value(inherited, value),
                    None => value,
                };
                merged.insert(key, value);
            }
            Value::Mapping(merged)
        }
        (_, top) => top,
    }
}

/// Merge config layers in order.
pub fn merge_layers(layers: Vec<Value>) -> Value {
    layers
        .into_iter()
        .fold(Value::Mapping(Mapping::new()), merge_value)
}

/// Read a config file as a raw YAML value. An empty file is an empty mapping.
pub fn load_config_value(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ShassertError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ShassertError::Io(e)
        }
    })?;

    if content.trim().is_empty() {
        return Ok(Value::Mapping(Mapping::new()));
    }

    serde_yaml::from_str(&content).map_err(|e| ShassertError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Deserialize a (possibly merged) YAML value. `source` is used for errors.
pub fn parse_config(value: Value, source: &Path) -> Result<ShassertConfig> {
    serde_yaml::from_value(value).map_err(|e| ShassertError::ConfigParseError {
        path: source.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a single config file.
pub fn load_config_file(path: &Path) -> Result<ShassertConfig> {
    parse_config(load_config_value(path)?, path)
}

/// Load and merge every discovered config file; defaults if there are none.
pub fn load_layered(paths: &ConfigPaths) -> Result<ShassertConfig> {
    let existing = paths.all_existing();
    let Some(last) = existing.last() else {
        return Ok(ShassertConfig::default());
    };
    let source = last.to_path_buf();

    let mut layers = Vec::with_capacity(existing.len());
    for path in existing {
        tracing::debug!("loading config layer {}", path.display());
        layers.push(load_config_value(path)?);
    }
    parse_config(merge_layers(layers), &source)
}

/// Load config with optional path override.
///
/// With an override only that file is read, and it must exist. Otherwise
/// config files are discovered from `cwd` and merged.
pub fn load_config(cwd: &Path, config_override: Option<&Path>) -> Result<ShassertConfig> {
    match config_override {
        Some(path) => load_config_file(path),
        None => load_layered(&ConfigPaths::discover(cwd)),
    }
}
