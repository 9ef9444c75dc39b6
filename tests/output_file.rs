// tests/output_file.rs

mod common;

use assert_cmd::prelude::*;
use common::{create_file, separator, srccat_cmd};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_output_to_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "src/a.cpp", "Content A")?;
    let output_path = temp.path().join("output.txt");

    srccat_cmd()
        .arg("src")
        .arg("-o")
        .arg(output_path.to_str().unwrap())
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(""); // No stdout expected

    let output_content = fs::read_to_string(&output_path)?;
    assert_eq!(
        output_content,
        format!("Contents of file 'src/a.cpp':\nContent A\n{}", separator())
    );

    temp.close()?;
    Ok(())
}

#[test]
fn test_output_file_inside_root_is_not_printed() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "a.cpp", "x")?;

    srccat_cmd()
        .args(["-o", "all.cpp"])
        .current_dir(temp.path())
        .assert()
        .success();

    let output_content = fs::read_to_string(temp.path().join("all.cpp"))?;
    assert!(output_content.contains("'./a.cpp'"));
    assert!(!output_content.contains("all.cpp"));

    temp.close()?;
    Ok(())
}
