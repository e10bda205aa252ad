//! Stats report output.
//!
//! This module handles:
//! - Writing versioned JSON stats reports to disk
//! - Reading reports back for validation
//! - Rendering the text summary printed to stdout

pub mod json;
pub mod summary;

// Re-export main types
pub use json::{read_report, to_report, write_report, StatsReport};
pub use summary::render_summary;
