//! File existence and size assertion.
//!
//! Existence and size are decided by one range test: a path whose size
//! cannot be read fails exactly where an out-of-range size would.

use std::fs;
use std::path::{Path, PathBuf};

use super::range::Range;
use super::status::{CheckFailure, CheckResult};

/// Upper bound applied when no maximum size is given (4 GiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1 << 32;

/// Source of file sizes.
pub trait FileMetadata {
    /// Size in bytes of the regular file at `path`, or `None` if there is none.
    fn file_size(&self, path: &Path) -> Option<u64>;
}

/// The local filesystem. Symlinks are followed.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl FileMetadata for LocalFs {
    fn file_size(&self, path: &Path) -> Option<u64> {
        fs::metadata(path)
            .ok()
            .filter(|m| m.is_file())
            .map(|m| m.len())
    }
}

/// Optional size bounds for `file_assert`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizeLimits {
    /// Minimum size in bytes; 0 when unset.
    pub min: Option<u64>,
    /// Maximum size in bytes; the sentinel when unset.
    pub max: Option<u64>,
}

impl SizeLimits {
    /// Limits with both bounds given.
    pub fn new(min: Option<u64>, max: Option<u64>) -> Self {
        Self { min, max }
    }

    /// The closed range actually checked, given the default upper bound.
    pub fn effective_range(&self, default_max: u64) -> Range {
        Range::new(
            Some(self.min.unwrap_or(0)),
            Some(self.max.unwrap_or(default_max)),
        )
    }
}

/// Confirm every path is a regular file whose size lies within `limits`.
///
/// `default_max` stands in for an unset maximum. Stops at the first
/// offending path.
pub fn file_assert<M>(
    meta: &M,
    paths: &[PathBuf],
    limits: SizeLimits,
    default_max: u64,
) -> CheckResult
where
    M: FileMetadata + ?Sized,
{
    if paths.is_empty() {
        return Err(CheckFailure::NoTargets { what: "path" });
    }

    let range = limits.effective_range(default_max);
    for path in paths {
        match meta.file_size(path) {
            Some(size) if range.contains(size) => {
                tracing::debug!("{}: {} bytes within {}", path.display(), size, range);
            }
            Some(size) => {
                return Err(CheckFailure::FileSizeOutOfRange {
                    path: path.clone(),
                    size,
                    range,
                })
            }
            None => return Err(CheckFailure::FileMissing { path: path.clone() }),
        }
    }
    Ok(())
}
