//! Filesystem input
//!
//! The only I/O the rewriter performs: one whole-file read into memory.

use std::fs;
use std::path::Path;

use crate::error::StripError;

/// Read the SQL document at `path` as text
///
/// Invalid UTF-8 sequences are replaced with U+FFFD rather than rejected;
/// backticks and ASCII digits are never part of such a sequence.
pub fn read_document(path: &Path) -> Result<String, StripError> {
    let bytes = fs::read(path).map_err(|source| StripError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    })
}
