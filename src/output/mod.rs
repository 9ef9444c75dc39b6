// src/output/mod.rs

//! Writes scan results: per-file blocks, inline read errors, and dry-run listings.

pub mod dry_run;
pub mod file_block;
pub mod writer; // Manages the output destination

pub use file_block::{separator_line, write_file_block, write_read_error};

use crate::errors::Error;

/// Wraps a failure to write the output stream itself.
pub(crate) fn output_error(source: std::io::Error) -> Error {
    Error::Io {
        path: "<output>".to_string(),
        source,
    }
}
