//! HTTP client for the Scryfall REST API.

use super::types::{CardData, ScryfallCard, SearchPage};
use crate::utils::config::{DEFAULT_HTTP_TIMEOUT, SCRYFALL_API_BASE};
use crate::utils::error::ScryfallError;
use log::{debug, info};
use reqwest::blocking::Client;
use reqwest::StatusCode;

/// Client for card search and lookup
pub struct ScryfallClient {
    client: Client,
    base_url: String,
}

impl ScryfallClient {
    /// Create a client against the public Scryfall API
    pub fn new() -> Result<Self, ScryfallError> {
        Self::with_base_url(SCRYFALL_API_BASE)
    }

    /// Create a client against a custom base URL (used by tests)
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ScryfallError> {
        let client = Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .user_agent(concat!("mtg-deck-studio/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ScryfallError::RequestFailed)?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Full-text card search
    ///
    /// Returns the first page of matches. An empty query and a 404 (the
    /// API's "no results" answer) both map to an empty list rather than
    /// an error.
    pub fn search(&self, query: &str) -> Result<Vec<CardData>, ScryfallError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        info!("Searching cards: {}", query);

        let response = self
            .client
            .get(format!("{}/cards/search", self.base_url))
            .query(&[("q", query)])
            .send()
            .map_err(ScryfallError::RequestFailed)?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!("No cards matched query: {}", query);
            return Ok(Vec::new());
        }

        if !response.status().is_success() {
            return Err(ScryfallError::InvalidResponse(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().unwrap_or_default()
            )));
        }

        let page: SearchPage = response.json().map_err(ScryfallError::RequestFailed)?;

        debug!(
            "Search returned {} cards (has_more: {})",
            page.data.len(),
            page.has_more
        );

        Ok(page.data.into_iter().map(CardData::from).collect())
    }

    /// Fuzzy lookup of a single card by name
    ///
    /// A 404 here means the name matched nothing and maps to
    /// `ScryfallError::CardNotFound`.
    pub fn named(&self, name: &str) -> Result<CardData, ScryfallError> {
        if name.trim().is_empty() {
            return Err(ScryfallError::CardNotFound(name.to_string()));
        }

        info!("Looking up card by name: {}", name);

        let response = self
            .client
            .get(format!("{}/cards/named", self.base_url))
            .query(&[("fuzzy", name)])
            .send()
            .map_err(ScryfallError::RequestFailed)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ScryfallError::CardNotFound(name.to_string()));
        }

        if !response.status().is_success() {
            return Err(ScryfallError::InvalidResponse(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().unwrap_or_default()
            )));
        }

        let card: ScryfallCard = response.json().map_err(ScryfallError::RequestFailed)?;

        debug!("Resolved '{}' to {}", name, card.name);

        Ok(CardData::from(card))
    }
}
