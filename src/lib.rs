//! `srccat` is a library and command-line tool that recursively prints the
//! contents of source files.
//!
//! It walks a directory tree, selects files whose names end with one of a set
//! of suffixes (C++ `.hpp` and `.cpp` by default), optionally keeps only files
//! that lie under a directory with a given name, and writes each selected file
//! as a block:
//!
//! ```text
//! Contents of file './src/graphic/Shader.cpp':
//! <the file's full text>
//! ================================================================================
//! ```
//!
//! A file that cannot be read as UTF-8 text produces a single
//! `Error reading file '<path>': <error>` line instead of a block, and the scan
//! carries on with the next file.
//!
//! The scan is strictly sequential: one file is discovered, read, written and
//! flushed before the walk moves on.
//!
//! # Example: Library Usage
//!
//! ```
//! use srccat::{scan, ConfigBuilder};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // 1. Set up a temporary directory with some files.
//! let temp_dir = tempdir().unwrap();
//! fs::create_dir_all(temp_dir.path().join("src/graphic")).unwrap();
//! fs::write(temp_dir.path().join("src/graphic/a.cpp"), "x").unwrap();
//! fs::write(temp_dir.path().join("src/b.hpp"), "y").unwrap();
//! fs::write(temp_dir.path().join("src/c.txt"), "z").unwrap();
//!
//! // 2. Keep only files under a `graphic` directory.
//! let config = ConfigBuilder::new()
//!     .input_path(temp_dir.path().to_str().unwrap())
//!     .dir_filter("graphic")
//!     .build()
//!     .unwrap();
//!
//! // 3. Scan into a buffer.
//! let mut output = Vec::new();
//! let report = scan(&config, &mut output).unwrap();
//!
//! let output = String::from_utf8(output).unwrap();
//! assert_eq!(report.printed, 1);
//! assert!(output.contains("a.cpp':\nx\n"));
//! assert!(!output.contains("b.hpp"));
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod discovery;
pub mod errors;
pub mod filtering;
pub mod output;
pub mod prelude;
pub mod processing;

// Re-export key public types for easier use as a library
pub use config::{Config, ConfigBuilder, OutputDestination};
pub use core_types::{FileInfo, ScanReport};
pub use discovery::discover_files;

use crate::config::resolve_input_path;
use crate::errors::{Error, Result};
use crate::output::{dry_run, output_error, write_file_block, write_read_error};
use log::debug;
use std::io::Write;
use std::path::PathBuf;
use tracing::instrument;

/// Scans the configured root and writes every matching file to `writer`.
///
/// For each file selected by [`discover_files`], the file is read in full and
/// then written as a block (header, content, separator). A read failure writes
/// one inline error line instead and the scan continues. `writer` is flushed
/// after every file. In dry-run mode only the matching paths are listed.
///
/// # Errors
/// Returns `Error::InvalidRoot` if the root cannot be resolved, before anything
/// is written. Returns `Error::Io` if writing to `writer` fails. Individual file
/// read failures are never returned as errors.
#[instrument(skip_all, fields(root = %config.input_path))]
pub fn scan(config: &Config, writer: &mut dyn Write) -> Result<ScanReport> {
    resolve_input_path(&config.input_path)?;

    // Never print the output file back into itself when it lies inside the root.
    let output_path = match &config.output_destination {
        OutputDestination::File(path) => path.canonicalize().ok(),
        _ => None,
    };

    let mut report = ScanReport::default();
    for file_info in discover_files(config) {
        if is_output_file(&file_info, output_path.as_ref()) {
            debug!("Skipping output file: {}", file_info.path.display());
            continue;
        }

        if config.dry_run {
            if report.printed == 0 {
                dry_run::write_dry_run_header(writer)?;
            }
            dry_run::write_dry_run_entry(writer, &file_info)?;
            writer.flush().map_err(output_error)?;
            report.printed += 1;
            continue;
        }

        match processing::read_file(&file_info) {
            Ok(content) => {
                write_file_block(writer, &file_info, &content)?;
                report.printed += 1;
            }
            Err(e) => {
                debug!("Failed to read {}: {}", file_info.path.display(), e);
                write_read_error(writer, &file_info, &e)?;
                report.failed += 1;
            }
        }
        writer.flush().map_err(output_error)?;
    }

    if config.dry_run && report.printed > 0 {
        dry_run::write_dry_run_footer(writer)?;
    }

    debug!(
        "Scan complete. Printed: {}, failed: {}",
        report.printed, report.failed
    );
    Ok(report)
}

fn is_output_file(file_info: &FileInfo, output_path: Option<&PathBuf>) -> bool {
    match output_path {
        Some(output_path) => file_info
            .path
            .canonicalize()
            .map(|p| &p == output_path)
            .unwrap_or(false),
        None => false,
    }
}

/// Runs a complete scan against the configured output destination.
///
/// This is the entry point used by the command-line tool: it opens the
/// destination (stdout or a file), runs [`scan`], and flushes the result.
///
/// The root is resolved before the destination is opened, so a bad root never
/// truncates an existing output file.
///
/// # Errors
/// Returns `Err(Error::NoFilesFound)` if no file matched. Other errors are
/// propagated from [`scan`] and from opening the destination.
pub fn run(config: &Config) -> Result<ScanReport> {
    resolve_input_path(&config.input_path)?;
    let mut writer = output::writer::setup_output_writer(config)?;
    let report = scan(config, &mut *writer)?;
    writer.flush().map_err(output_error)?;

    if report.matched() == 0 {
        return Err(Error::NoFilesFound);
    }
    Ok(report)
}
