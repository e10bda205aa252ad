//! Scryfall wire format and the card snapshot derived from it.

use serde::{Deserialize, Serialize};

/// One page of a `/cards/search` response
#[derive(Debug, Deserialize)]
pub struct SearchPage {
    /// Cards on this page
    pub data: Vec<ScryfallCard>,

    /// Whether more pages exist
    #[serde(default)]
    pub has_more: bool,

    /// Total match count across pages
    #[serde(default)]
    pub total_cards: Option<u64>,
}

/// A card object as served by Scryfall
///
/// Only the fields we consume; everything else is ignored. Double-faced
/// cards carry imagery and costs on `card_faces` instead of the top level.
#[derive(Debug, Clone, Deserialize)]
pub struct ScryfallCard {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub type_line: Option<String>,

    #[serde(default)]
    pub mana_cost: Option<String>,

    #[serde(default)]
    pub cmc: Option<f64>,

    #[serde(default)]
    pub image_uris: Option<ImageUris>,

    #[serde(default)]
    pub card_faces: Option<Vec<CardFace>>,

    #[serde(default)]
    pub prices: Option<Prices>,

    #[serde(default)]
    pub set_name: Option<String>,

    #[serde(default)]
    pub rarity: Option<String>,
}

/// One face of a double-faced card
#[derive(Debug, Clone, Deserialize)]
pub struct CardFace {
    #[serde(default)]
    pub type_line: Option<String>,

    #[serde(default)]
    pub mana_cost: Option<String>,

    #[serde(default)]
    pub image_uris: Option<ImageUris>,
}

/// Image URL variants
#[derive(Debug, Clone, Deserialize)]
pub struct ImageUris {
    #[serde(default)]
    pub normal: Option<String>,

    #[serde(default)]
    pub small: Option<String>,
}

/// Print prices; Scryfall serves these as decimal strings
#[derive(Debug, Clone, Deserialize)]
pub struct Prices {
    #[serde(default)]
    pub usd: Option<String>,

    #[serde(default)]
    pub usd_foil: Option<String>,
}

/// Card snapshot captured when an entry is created
///
/// **Public** - this is the shape deck mutations consume; after creation
/// the fields become immutable snapshot data on the entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardData {
    pub scryfall_id: String,
    pub name: String,
    pub type_line: String,
    pub mana_cost: String,
    pub cmc: f64,
    /// USD price as a decimal string, "0.00" when unknown
    pub price: String,
    pub image_url: String,
    pub set_name: String,
    pub rarity: String,
}

impl From<ScryfallCard> for CardData {
    fn from(card: ScryfallCard) -> Self {
        // Double-faced cards keep type line and cost on the faces
        let front = card.card_faces.as_ref().and_then(|faces| faces.first());

        let type_line = card
            .type_line
            .or_else(|| front.and_then(|f| f.type_line.clone()))
            .unwrap_or_default();

        let mana_cost = card
            .mana_cost
            .or_else(|| front.and_then(|f| f.mana_cost.clone()))
            .unwrap_or_default();

        let image_url = card
            .image_uris
            .as_ref()
            .and_then(|uris| uris.normal.clone())
            .or_else(|| {
                front
                    .and_then(|f| f.image_uris.as_ref())
                    .and_then(|uris| uris.normal.clone())
            })
            .unwrap_or_default();

        let price = card
            .prices
            .and_then(|p| p.usd)
            .unwrap_or_else(|| "0.00".to_string());

        Self {
            scryfall_id: card.id,
            name: card.name,
            type_line,
            mana_cost,
            cmc: card.cmc.unwrap_or(0.0),
            price,
            image_url,
            set_name: card.set_name.unwrap_or_default(),
            rarity: capitalize(&card.rarity.unwrap_or_default()),
        }
    }
}

/// Uppercase the first letter ("rare" -> "Rare")
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
