// src/output/writer.rs

//! Manages the output destination (stdout or file).
//!
//! This module provides the function that sets up the appropriate `Write`
//! trait object based on the user's configuration.

use crate::config::{Config, OutputDestination};
use crate::errors::{io_error_with_path, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Creates the appropriate output writer based on the `OutputDestination` in the config.
///
/// Stdout is returned unbuffered beyond its own line buffering; files are wrapped
/// in a `BufWriter`. Callers flush after every file so each block is complete on
/// the destination before the next file is read.
///
/// # Errors
/// Returns `Error::Io` if the output file cannot be created.
pub fn setup_output_writer(config: &Config) -> Result<Box<dyn Write>> {
    let writer: Box<dyn Write> = match &config.output_destination {
        OutputDestination::Stdout => Box::new(io::stdout().lock()),
        OutputDestination::File(path) => {
            let file = File::create(path).map_err(|e| io_error_with_path(e, path))?;
            Box::new(BufWriter::new(file))
        }
    };
    Ok(writer)
}
