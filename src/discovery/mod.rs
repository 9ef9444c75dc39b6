//! Discovers candidate files by walking the root directory.
use crate::config::Config;
use crate::core_types::FileInfo;
use log::debug;
use std::path::PathBuf;

mod entry_processor;
mod walker;

use entry_processor::process_direntry;
use walker::build_walker;

/// The subset of `Config` the walk needs, owned so the iterator is self-contained.
#[derive(Debug, Clone)]
pub(crate) struct DiscoveryOptions {
    pub(crate) root: PathBuf,
    pub(crate) suffixes: Vec<String>,
    pub(crate) dir_filter: Option<String>,
}

impl From<&Config> for DiscoveryOptions {
    fn from(config: &Config) -> Self {
        Self {
            root: PathBuf::from(&config.input_path),
            suffixes: config.suffixes.clone(),
            dir_filter: config.dir_filter.clone(),
        }
    }
}

/// Lazily discovers the files selected by the configuration.
///
/// The walk is driven by the returned iterator: each call to `next` advances
/// the walk only until the next matching file, so callers can fully handle one
/// file before the next directory entry is read. Paths in the yielded
/// `FileInfo` values start with `config.input_path` as given.
///
/// Entries that cannot be read during the walk (for example an unreadable
/// subdirectory) are logged and skipped. A missing root produces an empty
/// iterator; callers that need to report it should resolve the root first.
///
/// # Examples
///
/// ```
/// use srccat::{discover_files, ConfigBuilder};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let temp = tempdir().unwrap();
/// fs::write(temp.path().join("a.cpp"), "x").unwrap();
/// fs::write(temp.path().join("c.txt"), "z").unwrap();
///
/// let config = ConfigBuilder::new()
///     .input_path(temp.path().to_str().unwrap())
///     .build()
///     .unwrap();
///
/// let files: Vec<_> = discover_files(&config).collect();
/// assert_eq!(files.len(), 1);
/// assert!(files[0].path.ends_with("a.cpp"));
/// ```
pub fn discover_files(config: &Config) -> impl Iterator<Item = FileInfo> {
    let opts = DiscoveryOptions::from(config);
    debug!(
        "Starting discovery in '{}' for suffixes {:?} (dir filter: {:?})",
        opts.root.display(),
        opts.suffixes,
        opts.dir_filter
    );
    build_walker(&opts.root).filter_map(move |entry| process_direntry(entry, &opts))
}
