//! Deck and card data model.
//!
//! This module defines:
//! - The card entry stored inside a deck (one per card+board combination)
//! - The deck aggregate and its mutation entry points
//! - Board and category enums used across the crate

pub mod card;
pub mod deck;

// Re-export main types
pub use card::{Board, CardEntry, Category};
pub use deck::Deck;
