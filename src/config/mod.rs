//! Configuration loading for shassert.
//!
//! - Schema definitions in [`schema`]
//! - File discovery, layering and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use shassert::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("shassert.yml");
//! fs::write(&path, "max_file_size: 1048576").unwrap();
//!
//! let config = load_config(temp.path(), Some(&path)).unwrap();
//! assert_eq!(config.max_file_size, 1048576);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{
    load_config, load_config_file, load_layered, merge_layers, ConfigPaths, CONFIG_ENV,
    PROJECT_CONFIG,
};
pub use schema::{RandomSettings, ShassertConfig};
