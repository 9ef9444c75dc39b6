//! Defines application-specific error types.
//!
//! This module provides the `Error` enum, which categorizes the errors that can
//! stop a scan, offering more context than a bare `std::io::Error`.

use thiserror::Error;

/// A `Result` alias using the crate's [`enum@Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Application-specific errors used throughout `srccat`.
#[derive(Error, Debug)]
pub enum Error {
    // --- I/O Errors ---
    /// Error occurring while reading a candidate file or writing the output.
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String, // Use String to avoid lifetime issues if PathBuf is dropped
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// The root directory is missing or cannot be accessed.
    #[error("Failed to resolve input path '{path}': {source}")]
    InvalidRoot {
        /// The root path as given by the user.
        path: String,
        #[source]
        source: std::io::Error,
    },

    // --- Configuration Errors ---
    /// Invalid configuration settings or combinations.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The scan completed without a single file matching the criteria.
    #[error("No files found matching the specified criteria.")]
    NoFilesFound,
}

/// Helper function to create an `Error::Io` with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error, convertible to `AsRef<std::path::Path>`.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}
