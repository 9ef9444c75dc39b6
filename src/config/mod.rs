//! Defines the core `Config` struct and related types for application configuration.
//!
//! This module consolidates the settings parsed and validated from the CLI (or
//! set programmatically through [`ConfigBuilder`]), making them available to the
//! rest of the application in a structured and type-safe manner.

use std::path::PathBuf;

pub use builder::ConfigBuilder;
mod builder;
mod parsing;
pub mod path_resolve;

/// Holds the validated settings for a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The root directory to scan, as given. Displayed paths are built by joining onto it.
    pub input_path: String,
    /// Filename suffixes selecting candidate files. Always non-empty, each starting with `.`.
    pub suffixes: Vec<String>,
    /// If `Some`, a candidate must lie under a directory with exactly this name.
    pub dir_filter: Option<String>,
    /// Specifies where the output should be written.
    pub output_destination: OutputDestination,
    /// If `true`, list the files that would be printed instead of their content.
    pub dry_run: bool,
}

impl Config {
    /// Creates a default `Config` for testing purposes.
    #[doc(hidden)]
    pub fn new_for_test() -> Self {
        Self {
            input_path: crate::constants::DEFAULT_ROOT.to_string(),
            suffixes: crate::constants::DEFAULT_SUFFIXES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            dir_filter: None,
            output_destination: OutputDestination::Stdout,
            dry_run: false,
        }
    }
}

/// Represents the destination for the generated output.
#[derive(Debug, PartialEq, Eq, Clone)]
#[non_exhaustive]
pub enum OutputDestination {
    /// Write to standard output.
    Stdout,
    /// Write to the specified file path.
    File(PathBuf),
}

pub use path_resolve::resolve_input_path;
