//! The `srccat` prelude for convenient library usage.
//!
//! This module re-exports the most commonly used types and functions from the
//! `srccat` library.
//!
//! # Example
//!
//! ```
//! use srccat::prelude::*;
//! # fn main() -> Result<()> {
//!
//! let config = ConfigBuilder::new().input_path(".").dry_run(true).build()?;
//! let mut listing = Vec::new();
//! let report = scan(&config, &mut listing)?;
//! assert_eq!(report.failed, 0);
//!
//! # Ok(())
//! # }
//! ```

pub use crate::config::{Config, ConfigBuilder, OutputDestination};
pub use crate::core_types::{FileInfo, ScanReport};
pub use crate::errors::{Error, Result};
pub use crate::filtering::{passes_segment_filter, passes_suffix_filter};
pub use crate::output::{separator_line, write_file_block, write_read_error};
pub use crate::processing::read_file;
pub use crate::{discover_files, run, scan};
