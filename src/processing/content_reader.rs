// src/processing/content_reader.rs

use crate::errors::{io_error_with_path, Result};
use std::{fs, path::Path};

/// Reads the entire content of a file into a String.
///
/// Fails if the file cannot be opened or read, or if its bytes are not valid
/// UTF-8. No lossy conversion is attempted.
pub(super) fn read_file_content(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| io_error_with_path(e, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_read_valid_file() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let file_path = temp.path().join("Shader.cpp");
        let content = "#include \"Shader.hpp\"\n\nShader::Shader() {}\n";
        fs::write(&file_path, content)?;

        let read_content = read_file_content(&file_path)?;
        assert_eq!(read_content, content);

        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_read_empty_file() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let file_path = temp.path().join("empty.hpp");
        fs::write(&file_path, "")?;

        assert_eq!(read_file_content(&file_path)?, "");

        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_read_non_existent_file() {
        let path = Path::new("non_existent_file_for_srccat_test.cpp");
        let result = read_file_content(path);
        match result {
            Err(Error::Io { path, source }) => {
                assert!(path.contains("non_existent_file"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("Expected Error::Io, got {:?}", other),
        }
    }

    #[test]
    fn test_read_non_utf8_file() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let file_path = temp.path().join("latin1.cpp");
        fs::write(&file_path, [0x48, 0x65, 0x6c, 0x6c, 0x80, 0x6f])?;

        let err = read_file_content(&file_path).unwrap_err();
        match err {
            Error::Io { source, .. } => {
                assert_eq!(source.kind(), std::io::ErrorKind::InvalidData)
            }
            other => panic!("Expected Error::Io, got {:?}", other),
        }

        temp.close()?;
        Ok(())
    }
}
