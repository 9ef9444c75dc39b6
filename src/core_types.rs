//! Defines core data structures used throughout the scan.
//!
//! `FileInfo` describes one candidate file as it flows from discovery to
//! output; `ScanReport` tallies what a finished scan wrote.

use std::path::PathBuf;

/// A candidate file discovered during the walk.
///
/// # Examples
///
/// ```
/// use srccat::core_types::FileInfo;
/// use std::path::PathBuf;
///
/// let file_info = FileInfo {
///     path: PathBuf::from("./src/graphic/Shader.cpp"),
///     relative_path: PathBuf::from("src/graphic/Shader.cpp"),
/// };
///
/// assert_eq!(file_info.relative_path.to_str(), Some("src/graphic/Shader.cpp"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileInfo {
    /// The root joined with the relative path, exactly as the walker produced it.
    /// This is what headers and error lines display.
    pub path: PathBuf,
    /// The path relative to the root. Directory segment checks run against this.
    pub relative_path: PathBuf,
}

/// Counts of what a completed scan wrote to the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Number of file blocks (or dry-run entries) written.
    pub printed: usize,
    /// Number of inline read-error lines written.
    pub failed: usize,
}

impl ScanReport {
    /// Total number of files that matched the filters, readable or not.
    pub fn matched(&self) -> usize {
        self.printed + self.failed
    }
}
