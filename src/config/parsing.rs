// src/config/parsing.rs

use crate::errors::{Error, Result};

/// Normalizes suffixes: adds a missing leading `.` and drops duplicates, keeping order.
pub(super) fn normalize_suffixes(suffixes: Vec<String>) -> Result<Vec<String>> {
    let mut normalized: Vec<String> = Vec::with_capacity(suffixes.len());
    for raw in suffixes {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == "." {
            return Err(Error::Config(format!("Invalid suffix: '{}'", raw)));
        }
        let suffix = if trimmed.starts_with('.') {
            trimmed.to_string()
        } else {
            format!(".{}", trimmed)
        };
        if !normalized.contains(&suffix) {
            normalized.push(suffix);
        }
    }
    Ok(normalized)
}

/// Checks that a directory filter names a single path segment.
pub(super) fn validate_dir_filter(dir_filter: Option<String>) -> Result<Option<String>> {
    match dir_filter {
        Some(name) if name.is_empty() => Err(Error::Config(
            "Directory filter must not be empty".to_string(),
        )),
        Some(name) if name.contains('/') || name.contains(std::path::MAIN_SEPARATOR) => {
            Err(Error::Config(format!(
                "Directory filter '{}' must be a single directory name, not a path",
                name
            )))
        }
        other => Ok(other),
    }
}
