//! Random string and file generation.
//!
//! Both generators take the RNG from the caller; the CLI passes
//! `rand::thread_rng()`, tests pass a seeded `StdRng`.
//!
//! # Example
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use shassert::random::{random_string, Charset};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let token = random_string(&mut rng, 12, Charset::Hex);
//! assert_eq!(token.len(), 12);
//! assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
//! ```

pub mod charset;

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use anyhow::Context;
use rand::{Rng, RngCore};

use crate::error::{Result, ShassertError};

pub use charset::Charset;

/// Write buffer size for random files.
const CHUNK_SIZE: usize = 64 * 1024;

/// Draw `len` characters uniformly from `charset`.
pub fn random_string<R: Rng>(rng: &mut R, len: usize, charset: Charset) -> String {
    let alphabet = charset.alphabet();
    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
        .collect()
}

/// Write exactly `size` random bytes to `path`.
///
/// An existing path is left untouched unless `overwrite` is set. The file is
/// removed again if writing fails part way.
pub fn write_random_file<R: RngCore + ?Sized>(
    rng: &mut R,
    path: &Path,
    size: u64,
    overwrite: bool,
) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true);
    if overwrite {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }

    let mut file = options.open(path).map_err(|e| {
        if e.kind() == io::ErrorKind::AlreadyExists {
            ShassertError::FileExists {
                path: path.to_path_buf(),
            }
        } else {
            anyhow::Error::new(e)
                .context(format!("creating {}", path.display()))
                .into()
        }
    })?;

    if let Err(e) = fill(rng, &mut file, size, path) {
        drop(file);
        if let Err(rm) = fs::remove_file(path) {
            tracing::debug!("could not remove {}: {}", path.display(), rm);
        }
        return Err(e);
    }

    tracing::debug!("wrote {} random bytes to {}", size, path.display());
    Ok(())
}

fn fill<R, W>(rng: &mut R, out: &mut W, size: u64, path: &Path) -> Result<()>
where
    R: RngCore + ?Sized,
    W: Write,
{
    let mut buf = vec![0u8; CHUNK_SIZE];
    let mut remaining = size;
    while remaining > 0 {
        let n = remaining.min(CHUNK_SIZE as u64) as usize;
        rng.fill_bytes(&mut buf[..n]);
        out.write_all(&buf[..n])
            .with_context(|| format!("writing {}", path.display()))?;
        remaining -= n as u64;
    }
    out.flush()
        .with_context(|| format!("flushing {}", path.display()))?;
    Ok(())
}
