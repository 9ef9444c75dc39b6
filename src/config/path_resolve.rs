// src/config/path_resolve.rs

use crate::errors::{Error, Result};
use std::path::PathBuf;

/// Resolves the root path string to an absolute, canonicalized PathBuf.
///
/// Used to reject a missing or inaccessible root before the walk starts.
pub fn resolve_input_path(input_path_str: &str) -> Result<PathBuf> {
    PathBuf::from(input_path_str)
        .canonicalize()
        .map_err(|source| Error::InvalidRoot {
            path: input_path_str.to_string(),
            source,
        })
}
