// src/constants.rs

/// Root directory scanned when no path is given.
pub const DEFAULT_ROOT: &str = ".";

/// Filename suffixes selected when none are given: the C++ header/source pair.
pub const DEFAULT_SUFFIXES: &[&str] = &[".hpp", ".cpp"];

/// Character repeated to build the separator line written after each file.
pub const SEPARATOR_CHAR: char = '=';

/// Number of separator characters per separator line.
pub const SEPARATOR_WIDTH: usize = 80;
