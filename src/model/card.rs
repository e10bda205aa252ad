//! Card entry schema definitions.
//!
//! A `CardEntry` is one line of a deck list: a card, how many copies,
//! and which board it sits on. Field defaults are deliberately lenient
//! so that hand-edited or partially written deck files still load.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which card pool an entry belongs to
///
/// The two boards are independent: main-board statistics never include
/// sideboard entries and vice versa.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Board {
    /// The active deck list
    #[default]
    Main,

    /// Reserve pool for between-game swaps
    Sideboard,
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Board::Main => write!(f, "main"),
            Board::Sideboard => write!(f, "sideboard"),
        }
    }
}

/// Display category derived from a card's type line
///
/// Exactly three buckets. `Spells` is the catch-all for instants,
/// sorceries, enchantments, artifacts, planeswalkers and anything
/// unrecognized.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Category {
    Creatures,
    Lands,
    #[default]
    Spells,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Creatures => write!(f, "Creatures"),
            Category::Lands => write!(f, "Lands"),
            Category::Spells => write!(f, "Spells"),
        }
    }
}

/// One card line inside a deck
///
/// Card data (type line, cost, price) is snapshot data captured when the
/// entry was created from a lookup result; it is never re-fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardEntry {
    /// Identifier unique within the owning deck's card collection
    pub id: String,

    /// Scryfall card id; the same card may appear once per board
    pub scryfall_id: String,

    /// Display name
    pub name: String,

    /// Free-text type line (e.g. "Legendary Creature — Goblin Shaman")
    #[serde(default)]
    pub type_line: String,

    /// Mana cost symbols; empty for lands
    #[serde(default)]
    pub mana_cost: String,

    /// Converted mana cost, used for curve bucketing
    #[serde(default)]
    pub cmc: f64,

    /// Number of copies; stored entries always have quantity >= 1
    #[serde(default = "default_quantity")]
    pub quantity: u32,

    /// Category cached at creation time, derived from the type line
    #[serde(default)]
    pub category: Category,

    /// Board this entry belongs to
    #[serde(default)]
    pub board: Board,

    /// USD price per copy, as served by Scryfall (string decimal)
    #[serde(default = "default_price")]
    pub price: String,

    /// Card image URL for display
    #[serde(default)]
    pub image_url: String,
}

fn default_quantity() -> u32 {
    1
}

fn default_price() -> String {
    "0.00".to_string()
}

impl CardEntry {
    /// Price of a single copy as a number
    ///
    /// Unparseable or negative prices are treated as 0.
    pub fn unit_price(&self) -> f64 {
        self.price
            .trim()
            .parse::<f64>()
            .map(|p| p.max(0.0))
            .unwrap_or(0.0)
    }

    /// Effective copy count
    ///
    /// A stored quantity of 0 should never exist, but a hand-edited file
    /// may contain one; it counts as a single copy.
    pub fn copies(&self) -> u32 {
        self.quantity.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Board::Main).unwrap(), "\"main\"");
        assert_eq!(
            serde_json::to_string(&Board::Sideboard).unwrap(),
            "\"sideboard\""
        );
        let board: Board = serde_json::from_str("\"sideboard\"").unwrap();
        assert_eq!(board, Board::Sideboard);
    }

    #[test]
    fn test_entry_defaults_for_missing_fields() {
        // Minimal document: only identity fields present
        let entry: CardEntry = serde_json::from_str(
            r#"{"id": "c1", "scryfall_id": "abc", "name": "Mystery Card"}"#,
        )
        .unwrap();

        assert_eq!(entry.quantity, 1);
        assert_eq!(entry.cmc, 0.0);
        assert_eq!(entry.price, "0.00");
        assert_eq!(entry.category, Category::Spells);
        assert_eq!(entry.board, Board::Main);
    }

    #[test]
    fn test_unit_price_parsing() {
        let mut entry: CardEntry =
            serde_json::from_str(r#"{"id": "c1", "scryfall_id": "abc", "name": "X"}"#).unwrap();

        entry.price = "5.25".to_string();
        assert_eq!(entry.unit_price(), 5.25);

        entry.price = "not a price".to_string();
        assert_eq!(entry.unit_price(), 0.0);

        entry.price = "-3.00".to_string();
        assert_eq!(entry.unit_price(), 0.0);

        entry.price = " 0.10 ".to_string();
        assert_eq!(entry.unit_price(), 0.10);
    }

    #[test]
    fn test_copies_treats_zero_as_one() {
        let mut entry: CardEntry =
            serde_json::from_str(r#"{"id": "c1", "scryfall_id": "abc", "name": "X"}"#).unwrap();
        entry.quantity = 0;
        assert_eq!(entry.copies(), 1);
        entry.quantity = 4;
        assert_eq!(entry.copies(), 4);
    }
}
