//! Requirement manifests.
//!
//! A manifest is a YAML document with a `requirements` list:
//!
//! ```yaml
//! requirements:
//!   - kind: command
//!     names: [git, cargo]
//!   - kind: file
//!     paths: [Cargo.toml]
//!     min_size: 1
//!   - kind: range
//!     value: 3
//!     range: "1:5"
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::checker::Requirement;
use crate::error::{Result, ShassertError};

/// Default manifest file name, relative to the working directory.
pub const DEFAULT_MANIFEST: &str = "requirements.yml";

/// A parsed requirement manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    /// Requirements in evaluation order.
    #[serde(default)]
    pub requirements: Vec<Requirement>,
}

/// Parse manifest content. `source` is used for error reporting.
pub fn parse_manifest(content: &str, source: &Path) -> Result<Manifest> {
    // An empty document deserializes as unit, not as an empty mapping.
    if content.trim().is_empty() {
        return Ok(Manifest::default());
    }
    serde_yaml::from_str(content).map_err(|e| ShassertError::ManifestError {
        path: source.to_path_buf(),
        message: e.to_string(),
    })
}

/// Read and parse a manifest file.
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let content = fs::read_to_string(path).map_err(|e| ShassertError::ManifestError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_manifest(&content, path)
}
