// src/filtering/segment.rs

use std::path::{Component, Path};

/// Checks if one of the directory segments of a relative path equals `dir_name`.
///
/// Only the parent directories are considered; the file name itself is never a
/// segment. Matching is exact equality per segment, not a substring search over
/// the whole path, so `graphic` matches `src/graphic/a.cpp` but neither
/// `src/graphics/a.cpp` nor `src/graphic.cpp`.
///
/// # Examples
///
/// ```
/// use srccat::filtering::passes_segment_filter;
/// use std::path::Path;
///
/// assert!(passes_segment_filter(Path::new("src/graphic/a.cpp"), "graphic"));
/// assert!(!passes_segment_filter(Path::new("src/b.hpp"), "graphic"));
/// ```
pub fn passes_segment_filter(relative_path: &Path, dir_name: &str) -> bool {
    let Some(parent) = relative_path.parent() else {
        return false;
    };
    parent.components().any(|component| match component {
        Component::Normal(segment) => segment == dir_name,
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_direct_parent() {
        assert!(passes_segment_filter(
            Path::new("src/graphic/a.cpp"),
            "graphic"
        ));
    }

    #[test]
    fn test_segment_any_ancestor() {
        assert!(passes_segment_filter(
            Path::new("src/graphic/shader/component/pass/User.cpp"),
            "graphic"
        ));
        assert!(passes_segment_filter(
            Path::new("graphic/Api.hpp"),
            "graphic"
        ));
    }

    #[test]
    fn test_segment_requires_exact_equality() {
        assert!(!passes_segment_filter(
            Path::new("src/graphics/a.cpp"),
            "graphic"
        ));
        assert!(!passes_segment_filter(Path::new("src/graph/a.cpp"), "graphic"));
        assert!(!passes_segment_filter(
            Path::new("src/Graphic/a.cpp"),
            "graphic"
        ));
    }

    #[test]
    fn test_segment_file_name_does_not_count() {
        assert!(!passes_segment_filter(Path::new("src/graphic"), "graphic"));
        assert!(!passes_segment_filter(Path::new("graphic"), "graphic"));
    }

    #[test]
    fn test_segment_ignores_special_components() {
        assert!(!passes_segment_filter(Path::new("./a.cpp"), "."));
        assert!(!passes_segment_filter(Path::new("../a.cpp"), ".."));
    }
}
