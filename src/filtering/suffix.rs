// src/filtering/suffix.rs

use std::path::Path;

/// Checks if a file's name ends with one of the given suffixes.
///
/// The comparison is a plain, case-sensitive `ends_with` on the file name, so
/// `.cpp` matches `Shader.cpp` but not `Shader.CPP` or `Shader.cpp.bak`. A path
/// without a file name never matches. Non-UTF-8 names are compared lossily.
///
/// # Examples
///
/// ```
/// use srccat::filtering::passes_suffix_filter;
/// use std::path::Path;
///
/// let suffixes = vec![".hpp".to_string(), ".cpp".to_string()];
///
/// assert!(passes_suffix_filter(Path::new("src/graphic/Shader.cpp"), &suffixes));
/// assert!(passes_suffix_filter(Path::new("include/Api.hpp"), &suffixes));
/// assert!(!passes_suffix_filter(Path::new("CMakeLists.txt"), &suffixes));
/// ```
pub fn passes_suffix_filter(path: &Path, suffixes: &[String]) -> bool {
    let Some(file_name) = path.file_name() else {
        return false;
    };
    let file_name = file_name.to_string_lossy();
    suffixes
        .iter()
        .any(|suffix| file_name.ends_with(suffix.as_str()))
}
