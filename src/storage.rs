//! Writing rendered identicons to disk.
//!
//! Files are named after their input: `Banana` → `Banana.png`. Characters
//! that are not portable in a single path component (separators, control
//! characters, and those Windows reserves) are replaced with `_`, and the
//! stem is capped at [`MAX_STEM_BYTES`]:
//!
//! - `"Banana"` → `Banana.png`
//! - `"a/b"` → `a_b.png`
//! - `"why?"` → `why_.png`
//! - `".hidden"` → `_hidden.png`
//! - `""` → `identicon.png`
//!
//! Distinct inputs can therefore share a name. [`file_name_with_suffix`]
//! gives the batch driver a second candidate to break such ties.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Extension of every file written by [`save`].
pub const EXTENSION: &str = "png";

/// Stem used when the input is empty.
const EMPTY_INPUT_STEM: &str = "identicon";

/// Longest stem kept, in bytes. Leaves room for a suffix and the extension
/// under the common 255-byte file name limit.
pub const MAX_STEM_BYTES: usize = 200;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// File name for the identicon of `input`.
pub fn file_name_for(input: &str) -> String {
    format!("{}.{EXTENSION}", file_stem_for(input))
}

/// File name for `input` with `-{suffix}` appended to the stem.
pub fn file_name_with_suffix(input: &str, suffix: &str) -> String {
    format!("{}-{suffix}.{EXTENSION}", file_stem_for(input))
}

fn file_stem_for(input: &str) -> String {
    if input.is_empty() {
        return EMPTY_INPUT_STEM.to_string();
    }
    let mut stem = String::with_capacity(input.len().min(MAX_STEM_BYTES));
    for c in input.chars() {
        let c = match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        };
        if stem.len() + c.len_utf8() > MAX_STEM_BYTES {
            break;
        }
        stem.push(c);
    }
    if stem.starts_with('.') {
        stem.replace_range(..1, "_");
    }
    stem
}

/// Write `bytes` to `dir/name`, creating `dir` if needed.
pub fn save(bytes: &[u8], name: &str, dir: &Path) -> Result<PathBuf, StorageError> {
    std::fs::create_dir_all(dir).map_err(|source| StorageError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let path = dir.join(name);
    std::fs::write(&path, bytes).map_err(|source| StorageError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
