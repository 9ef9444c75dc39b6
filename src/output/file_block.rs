use crate::constants::{SEPARATOR_CHAR, SEPARATOR_WIDTH};
use crate::core_types::FileInfo;
use crate::errors::{Error, Result};
use std::io::Write;

/// Returns the separator line written after each file's content, without a newline.
pub fn separator_line() -> String {
    std::iter::repeat(SEPARATOR_CHAR)
        .take(SEPARATOR_WIDTH)
        .collect()
}

/// Writes a single file's block: header, verbatim content, separator.
///
/// The content is followed by a newline even if it already ends with one, so a
/// file ending in `\n` is separated from the separator line by an empty line.
pub fn write_file_block(
    writer: &mut dyn Write,
    file_info: &FileInfo,
    content: &str,
) -> Result<()> {
    write_block(writer, file_info, content).map_err(|e| output_error(e, file_info))
}

/// Writes the inline error line for a file that could not be read.
///
/// For I/O failures only the underlying error text is shown, since the path is
/// already part of the line.
pub fn write_read_error(
    writer: &mut dyn Write,
    file_info: &FileInfo,
    error: &Error,
) -> Result<()> {
    let result = match error {
        Error::Io { source, .. } => writeln!(
            writer,
            "Error reading file '{}': {}",
            file_info.path.display(),
            source
        ),
        other => writeln!(
            writer,
            "Error reading file '{}': {}",
            file_info.path.display(),
            other
        ),
    };
    result.map_err(|e| output_error(e, file_info))
}

fn write_block(
    writer: &mut dyn Write,
    file_info: &FileInfo,
    content: &str,
) -> std::io::Result<()> {
    writeln!(writer, "Contents of file '{}':", file_info.path.display())?;
    writeln!(writer, "{}", content)?;
    writeln!(writer, "{}", separator_line())?;
    Ok(())
}

fn output_error(source: std::io::Error, file_info: &FileInfo) -> Error {
    log::warn!(
        "Write failed while emitting output for {}: {}",
        file_info.path.display(),
        source
    );
    super::output_error(source)
}
