// src/discovery/entry_processor.rs

use crate::core_types::FileInfo;
use crate::discovery::DiscoveryOptions;
use crate::filtering::{passes_segment_filter, passes_suffix_filter};
use ignore::DirEntry;
use log::{trace, warn};
use std::path::PathBuf;

/// Processes a single directory entry from the walk.
///
/// Returns `Some(FileInfo)` if the entry is a non-directory that passes the
/// suffix filter and, when configured, the directory segment filter. Returns
/// `None` for directories, filtered-out files, and walker errors; the latter
/// are logged and skipped so one unreadable directory does not end the scan.
pub(crate) fn process_direntry(
    entry_result: Result<DirEntry, ignore::Error>,
    opts: &DiscoveryOptions,
) -> Option<FileInfo> {
    // --- 1. Handle Walker Errors ---
    let entry = match entry_result {
        Ok(entry) => entry,
        Err(ignore_error) => {
            warn!("Walker error: {}", ignore_error);
            return None;
        }
    };

    let path = entry.path();
    trace!("Processing entry: {}", path.display());

    // --- 2. Skip Directories ---
    // Symlinks are not followed by the walker, so a link to a directory shows up
    // as a symlink entry. It is skipped like a directory; links to files are kept.
    let is_dir = match entry.file_type() {
        Some(ft) if ft.is_dir() => true,
        Some(ft) if ft.is_symlink() => path.is_dir(),
        Some(_) => false,
        None => true,
    };
    if is_dir {
        return None;
    }

    // --- 3. Suffix Filter ---
    if !passes_suffix_filter(path, &opts.suffixes) {
        trace!("Skipping (suffix): {}", path.display());
        return None;
    }

    // --- 4. Calculate Relative Path ---
    let relative_path = match path.strip_prefix(&opts.root) {
        Ok(rel) if !rel.as_os_str().is_empty() => rel.to_path_buf(),
        // The root itself is a file.
        _ => path.file_name().map(PathBuf::from).unwrap_or_default(),
    };

    // --- 5. Directory Segment Filter ---
    if let Some(dir_name) = &opts.dir_filter {
        if !passes_segment_filter(&relative_path, dir_name) {
            trace!(
                "Skipping (not under '{}'): {}",
                dir_name,
                relative_path.display()
            );
            return None;
        }
    }

    Some(FileInfo {
        path: path.to_path_buf(),
        relative_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::walker::build_walker;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn opts(root: &Path, dir_filter: Option<&str>) -> DiscoveryOptions {
        DiscoveryOptions {
            root: root.to_path_buf(),
            suffixes: vec![".hpp".to_string(), ".cpp".to_string()],
            dir_filter: dir_filter.map(String::from),
        }
    }

    fn collect(root: &Path, dir_filter: Option<&str>) -> Vec<FileInfo> {
        let opts = opts(root, dir_filter);
        build_walker(root)
            .filter_map(|entry| process_direntry(entry, &opts))
            .collect()
    }

    #[test]
    fn test_relative_paths_from_root() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::create_dir_all(temp.path().join("src/graphic"))?;
        fs::write(temp.path().join("src/graphic/a.cpp"), "x")?;
        fs::write(temp.path().join("src/c.txt"), "z")?;

        let files = collect(temp.path(), None);
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].relative_path, PathBuf::from("src/graphic/a.cpp"));
        assert_eq!(files[0].path, temp.path().join("src/graphic/a.cpp"));
        Ok(())
    }

    #[test]
    fn test_dir_filter_applies_to_relative_segments() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let root = temp.path().join("graphic");
        fs::create_dir_all(root.join("src"))?;
        fs::write(root.join("src/a.cpp"), "x")?;

        // The root's own name is not a segment of the relative path.
        assert!(collect(&root, Some("graphic")).is_empty());
        assert_eq!(collect(&root, Some("src")).len(), 1);
        Ok(())
    }

    #[test]
    fn test_directory_with_suffix_name_is_skipped() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::create_dir(temp.path().join("weird.cpp"))?;
        fs::write(temp.path().join("weird.cpp").join("inner.hpp"), "y")?;

        let files = collect(temp.path(), None);
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].relative_path, PathBuf::from("weird.cpp/inner.hpp"));
        Ok(())
    }

    #[test]
    fn test_root_is_a_file() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let file = temp.path().join("main.cpp");
        fs::write(&file, "int main() {}")?;

        let files = collect(&file, None);
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].relative_path, PathBuf::from("main.cpp"));
        assert_eq!(files[0].path, file);
        Ok(())
    }

    #[test]
    fn test_walker_error_is_skipped() {
        let opts = opts(Path::new("."), None);
        let err = ignore::Error::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert!(process_direntry(Err(err), &opts).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_not_descended() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let real = temp.path().join("real");
        fs::create_dir(&real)?;
        fs::write(real.join("a.cpp"), "x")?;
        std::os::unix::fs::symlink(&real, temp.path().join("link.cpp"))?;

        let files = collect(temp.path(), None);
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].relative_path, PathBuf::from("real/a.cpp"));
        Ok(())
    }
}
