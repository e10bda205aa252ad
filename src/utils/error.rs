//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.
//!
//! The statistics core has no error type at all: it is total, defaulting
//! malformed entries instead of rejecting them.

use thiserror::Error;

/// Errors that can occur mutating a deck's card collection
#[derive(Error, Debug)]
pub enum DeckError {
    #[error("Card not found in deck: {0}")]
    CardNotFound(String),

    #[error("Quantity out of range: {0}")]
    InvalidQuantity(i64),
}

/// Errors that can occur talking to the Scryfall API
#[derive(Error, Debug)]
pub enum ScryfallError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Invalid Scryfall response: {0}")]
    InvalidResponse(String),

    #[error("No card matched name: {0}")]
    CardNotFound(String),
}

/// Errors that can occur in the JSON deck store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Deck not found: {0}")]
    DeckNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize deck JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid deck name: {0}")]
    InvalidName(String),

    #[error("Invalid collection path: {0}")]
    InvalidPath(String),
}

/// Errors that can occur writing or reading stats reports
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to read file: {0}")]
    ReadFailed(std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
