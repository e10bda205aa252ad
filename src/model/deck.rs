//! Deck aggregate and its mutation entry points.
//!
//! All card mutations go through the deck so the zero-quantity rule is
//! enforced in exactly one place: an operation that would leave an entry
//! with quantity <= 0 deletes the entry instead. The data model has no
//! representation for a zero-quantity card.

use crate::model::card::{Board, CardEntry};
use crate::scryfall::CardData;
use crate::stats::categorize;
use crate::utils::config::DEFAULT_FORMAT;
use crate::utils::error::DeckError;
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

/// A named deck and its card collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    /// Store-unique identifier (also the file stem on disk)
    pub id: String,

    /// Display name
    pub name: String,

    /// Play format (Standard, Modern, Commander, ...)
    #[serde(default = "default_format")]
    pub format: String,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last mutation timestamp
    pub updated_at: DateTime<Utc>,

    /// Counter backing card entry id generation
    #[serde(default)]
    next_entry_id: u64,

    /// Card entries, both boards
    #[serde(default)]
    pub cards: Vec<CardEntry>,
}

fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}

impl Deck {
    /// Create an empty deck
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        format: Option<&str>,
        description: Option<&str>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            format: format.unwrap_or(DEFAULT_FORMAT).to_string(),
            description: description.unwrap_or("").to_string(),
            created_at: now,
            updated_at: now,
            next_entry_id: 0,
            cards: Vec::new(),
        }
    }

    /// Add a copy of a card to the given board
    ///
    /// If the same card already sits on that board, its quantity is
    /// incremented; otherwise a new entry is created with quantity 1 and
    /// the category derived from the type line. Returns the entry id.
    pub fn add_card(&mut self, card: &CardData, board: Board) -> String {
        if let Some(existing) = self
            .cards
            .iter_mut()
            .find(|entry| entry.scryfall_id == card.scryfall_id && entry.board == board)
        {
            existing.quantity += 1;
            debug!(
                "Incremented {} on {} board to {} copies",
                existing.name, board, existing.quantity
            );
            let id = existing.id.clone();
            self.touch();
            return id;
        }

        self.next_entry_id += 1;
        let id = format!("c{}", self.next_entry_id);

        let entry = CardEntry {
            id: id.clone(),
            scryfall_id: card.scryfall_id.clone(),
            name: card.name.clone(),
            type_line: card.type_line.clone(),
            mana_cost: card.mana_cost.clone(),
            cmc: card.cmc,
            quantity: 1,
            category: categorize(&card.type_line),
            board,
            price: card.price.clone(),
            image_url: card.image_url.clone(),
        };

        debug!("Added {} ({}) to {} board", entry.name, entry.id, board);
        self.cards.push(entry);
        self.touch();
        id
    }

    /// Set the quantity of an entry
    ///
    /// This is the single mutation entry point for quantities: a target
    /// quantity <= 0 removes the entry from the collection entirely.
    pub fn set_card_quantity(&mut self, card_id: &str, quantity: i64) -> Result<(), DeckError> {
        if quantity <= 0 {
            return self.remove_card(card_id);
        }

        // Reject rather than truncate: a wrapped count could store 0 and
        // break the no-zero-quantity invariant this method exists to hold
        let quantity =
            u32::try_from(quantity).map_err(|_| DeckError::InvalidQuantity(quantity))?;

        let entry = self
            .cards
            .iter_mut()
            .find(|entry| entry.id == card_id)
            .ok_or_else(|| DeckError::CardNotFound(card_id.to_string()))?;

        entry.quantity = quantity;
        debug!("Set {} to {} copies", entry.name, entry.quantity);
        self.touch();
        Ok(())
    }

    /// Remove an entry outright
    pub fn remove_card(&mut self, card_id: &str) -> Result<(), DeckError> {
        let position = self
            .cards
            .iter()
            .position(|entry| entry.id == card_id)
            .ok_or_else(|| DeckError::CardNotFound(card_id.to_string()))?;

        let removed = self.cards.remove(position);
        debug!("Removed {} ({}) from deck {}", removed.name, removed.id, self.id);
        self.touch();
        Ok(())
    }

    /// Look up an entry by id
    pub fn card(&self, card_id: &str) -> Option<&CardEntry> {
        self.cards.iter().find(|entry| entry.id == card_id)
    }

    /// Bump the mutation timestamp
    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
