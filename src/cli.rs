// src/cli.rs

use clap::Parser;

/// Recursively prints the contents of source files.
///
/// srccat walks a directory tree, selects files whose names end with one of the
/// configured suffixes (C++ `.hpp` and `.cpp` by default), and prints each one
/// as a header line, its full text, and an 80-character separator. Run without
/// arguments it scans the current directory.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the directory to scan.
    #[arg(default_value = crate::constants::DEFAULT_ROOT)]
    pub input_path: String,

    // --- Filtering Options ---
    /// Print only files whose name ends with one of these suffixes (case-sensitive, repeatable).
    /// A missing leading '.' is added. Defaults to .hpp and .cpp.
    #[arg(short = 's', long = "suffix", value_name = "SUFFIX", num_args = 1..)]
    pub suffixes: Option<Vec<String>>,

    /// Print only files that lie under a directory with exactly this name.
    /// Only directories below PATH are compared; the components of PATH itself never match.
    #[arg(short = 'd', long = "dir", value_name = "NAME")]
    pub dir_filter: Option<String>,

    // --- Output Destination ---
    /// Write output to the specified file instead of stdout.
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output_file: Option<String>,

    // --- Execution Control ---
    /// Perform a dry run. List the files that would be printed but not their content.
    #[arg(short = 'D', long, action = clap::ArgAction::SetTrue)]
    pub dry_run: bool,
}
