// src/config/builder.rs

use super::parsing::{normalize_suffixes, validate_dir_filter};
use super::{Config, OutputDestination};
use crate::cli::Cli;
use crate::constants::{DEFAULT_ROOT, DEFAULT_SUFFIXES};
use crate::errors::Result;
use std::path::PathBuf;

/// A builder for creating a `Config` instance.
///
/// Every setting is optional; unset settings fall back to the defaults of the
/// command-line tool (scan `.` for `.hpp`/`.cpp` files, print to stdout).
///
/// # Examples
///
/// ```
/// use srccat::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .input_path("src")
///     .suffixes(vec!["cc".to_string(), ".h".to_string()])
///     .dir_filter("graphic")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.suffixes, vec![".cc".to_string(), ".h".to_string()]);
/// assert_eq!(config.dir_filter.as_deref(), Some("graphic"));
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    input_path: Option<String>,
    suffixes: Option<Vec<String>>,
    dir_filter: Option<String>,
    output_file: Option<String>,
    dry_run: Option<bool>,
}

impl ConfigBuilder {
    /// Creates a new `ConfigBuilder` with every setting unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a `ConfigBuilder` from parsed command-line arguments.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            input_path: Some(cli.input_path),
            suffixes: cli.suffixes,
            dir_filter: cli.dir_filter,
            output_file: cli.output_file,
            dry_run: Some(cli.dry_run),
        }
    }

    /// Sets the root directory to scan.
    pub fn input_path(mut self, path: impl Into<String>) -> Self {
        self.input_path = Some(path.into());
        self
    }

    /// Replaces the default suffix set.
    pub fn suffixes(mut self, suffixes: Vec<String>) -> Self {
        self.suffixes = Some(suffixes);
        self
    }

    /// Restricts output to files under a directory with exactly this name.
    pub fn dir_filter(mut self, name: impl Into<String>) -> Self {
        self.dir_filter = Some(name.into());
        self
    }

    /// Writes output to a file instead of stdout.
    pub fn output_file(mut self, path: impl Into<String>) -> Self {
        self.output_file = Some(path.into());
        self
    }

    /// Lists matching files instead of printing their content.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = Some(dry_run);
        self
    }

    /// Validates the settings and builds the final `Config`.
    ///
    /// # Errors
    /// Returns `Error::Config` for an empty suffix or a directory filter that is
    /// empty or contains a path separator.
    pub fn build(self) -> Result<Config> {
        let suffixes = normalize_suffixes(self.suffixes.unwrap_or_else(|| {
            DEFAULT_SUFFIXES.iter().map(|s| s.to_string()).collect()
        }))?;
        let dir_filter = validate_dir_filter(self.dir_filter)?;
        let output_destination = match self.output_file {
            Some(path) => OutputDestination::File(PathBuf::from(path)),
            None => OutputDestination::Stdout,
        };

        let config = Config {
            input_path: self
                .input_path
                .unwrap_or_else(|| DEFAULT_ROOT.to_string()),
            suffixes,
            dir_filter,
            output_destination,
            dry_run: self.dry_run.unwrap_or(false),
        };
        log::debug!("Built configuration: {:?}", config);
        Ok(config)
    }
}
