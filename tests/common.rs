// tests/common.rs

use std::fs;
use std::path::Path;
use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn srccat_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("srccat"))
}

/// Writes `content` to `relative_path` under `dir`, creating parent directories.
#[allow(dead_code)]
pub fn create_file(
    dir: &Path,
    relative_path: &str,
    content: impl AsRef<[u8]>,
) -> Result<(), Box<dyn std::error::Error>> {
    let file_path = dir.join(relative_path);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    Ok(())
}

/// The 80-character separator line, with its newline.
#[allow(dead_code)]
pub fn separator() -> String {
    format!("{}\n", "=".repeat(80))
}
