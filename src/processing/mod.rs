//! Handles the reading stage of a scan.
//!
//! Each candidate is read completely as UTF-8 text before anything about it is
//! written, so a failed read leaves no partial block behind.

use crate::core_types::FileInfo;
use crate::errors::Result;
use log::debug;

mod content_reader;

use content_reader::read_file_content;

/// Reads the full text of a discovered file.
///
/// # Errors
/// Returns `Error::Io` naming the file's display path if it cannot be opened,
/// cannot be read, or is not valid UTF-8.
pub fn read_file(file_info: &FileInfo) -> Result<String> {
    debug!("Reading file: {}", file_info.path.display());
    read_file_content(&file_info.path)
}
