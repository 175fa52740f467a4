//! Configuration schema.
//!
//! Every field has a default, so an empty file (or no file at all) yields a
//! working configuration.

use serde::{Deserialize, Serialize};

use crate::random::Charset;
use crate::requirements::DEFAULT_MAX_FILE_SIZE;

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShassertConfig {
    /// Upper size bound for `file_assert` when `--maxsize` is not given.
    pub max_file_size: u64,

    /// Extra names `require` treats as shell aliases/functions.
    pub shell_names: Vec<String>,

    /// Defaults for the random generators.
    pub random: RandomSettings,
}

impl Default for ShassertConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            shell_names: Vec::new(),
            random: RandomSettings::default(),
        }
    }
}

/// Defaults for `rand_str` and `rand_file`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RandomSettings {
    /// Length of generated strings.
    pub length: usize,

    /// Alphabet for generated strings.
    pub charset: Charset,

    /// Size in bytes of generated files.
    pub file_size: u64,
}

impl Default for RandomSettings {
    fn default() -> Self {
        Self {
            length: 16,
            charset: Charset::Alnum,
            file_size: 1024,
        }
    }
}
