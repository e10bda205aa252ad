//! MTG Deck Studio
//!
//! Deck building, statistics and analysis for Magic: The Gathering
//! decks, backed by the Scryfall card database.
//!
//! This crate provides the core implementation for the
//! `deck-studio` CLI tool.
//!
//! ## Getting Started
//!
//! Most users should install and use the CLI:
//!
//! ```bash
//! cargo install mtg-deck-studio
//! deck-studio --help
//! ```

pub mod analysis;
pub mod commands;
pub mod model;
pub mod output;
pub mod scryfall;
pub mod stats;
pub mod store;
pub mod utils;
