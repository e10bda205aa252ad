//! Deck statistics core.
//!
//! This module handles:
//! - Mapping a type line to a display category
//! - Aggregating a deck's card list into a statistics snapshot
//!
//! Both entry points are pure functions over the card list; statistics
//! are never stored, always recomputed from the current collection.

pub mod categorize;
pub mod compute;

// Re-export main types
pub use categorize::categorize;
pub use compute::{compute_stats, curve_bucket, DeckStats};
