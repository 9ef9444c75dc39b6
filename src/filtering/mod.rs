// src/filtering/mod.rs

//! Provides standalone functions for file filtering logic.
//!
//! These functions are used by the discovery stage to determine which files
//! are printed. They are exposed publicly to allow for their use in other
//! contexts.

mod segment;
mod suffix;

pub use segment::passes_segment_filter;
pub use suffix::passes_suffix_filter;
