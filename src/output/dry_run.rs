// src/output/dry_run.rs

use super::output_error;
use crate::core_types::FileInfo;
use crate::errors::Result;
use std::io::Write;

/// Writes the opening line of a dry-run listing.
pub fn write_dry_run_header(writer: &mut dyn Write) -> Result<()> {
    writeln!(writer, "--- Dry Run: Files that would be printed ---").map_err(output_error)
}

/// Writes one dry-run entry for a file that would be printed.
pub fn write_dry_run_entry(writer: &mut dyn Write, file_info: &FileInfo) -> Result<()> {
    writeln!(writer, "- {}", file_info.path.display()).map_err(output_error)
}

/// Writes the closing line of a dry-run listing.
pub fn write_dry_run_footer(writer: &mut dyn Write) -> Result<()> {
    writeln!(writer, "--- End Dry Run ---").map_err(output_error)?;
    writer.flush().map_err(output_error)
}
