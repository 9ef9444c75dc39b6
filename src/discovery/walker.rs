use ignore::{Walk, WalkBuilder};
use log::debug;
use std::path::Path;

/// Configures and builds a sequential `ignore::Walk` rooted at `root`.
///
/// Every standard filter is turned off so the walk sees everything on disk:
/// hidden entries are visited and `.gitignore`/`.ignore` files are not honored.
/// Symbolic links are not followed, so linked directories are never descended
/// into. Entries within a directory are yielded in file-name order.
pub(super) fn build_walker(root: &Path) -> Walk {
    let mut walker_builder = WalkBuilder::new(root);
    walker_builder
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b));
    debug!(
        "Configuring WalkBuilder for '{}': standard_filters disabled, links not followed.",
        root.display()
    );
    walker_builder.build()
}
