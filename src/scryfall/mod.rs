//! Scryfall card lookup.
//!
//! This module handles:
//! - Searching cards by query string
//! - Fuzzy lookup of a single card by name
//! - Mapping Scryfall wire JSON to the snapshot we store on deck entries

pub mod client;
pub mod types;

// Re-export main types
pub use client::ScryfallClient;
pub use types::{CardData, ScryfallCard};
