//! Card mutation commands: add, set quantity, remove.
//!
//! Every mutation follows the same sequence: mutate the deck aggregate,
//! persist it, and only then recompute and print statistics. Statistics
//! are never computed speculatively before the save succeeds.

use crate::model::Board;
use crate::scryfall::ScryfallClient;
use crate::stats::compute_stats;
use crate::store::DeckStore;
use anyhow::{Context, Result};
use log::info;

/// Look up a card by name and add a copy to the deck
pub fn execute_add_card(
    store: &DeckStore,
    client: &ScryfallClient,
    deck_id: &str,
    card_name: &str,
    board: Board,
) -> Result<()> {
    let mut deck = store
        .load_deck(deck_id)
        .with_context(|| format!("Failed to load deck {}", deck_id))?;

    let card = client
        .named(card_name)
        .with_context(|| format!("Failed to look up card '{}'", card_name))?;

    info!("Resolved '{}' to {} ({})", card_name, card.name, card.scryfall_id);

    let entry_id = deck.add_card(&card, board);
    store.save_deck(&deck).context("Failed to save deck")?;

    let stats = compute_stats(&deck.cards);
    let entry = deck
        .card(&entry_id)
        .context("Entry missing after mutation")?;

    println!(
        "{}x {} on {} board ({} main / {} side)",
        entry.quantity, entry.name, board, stats.total_cards, stats.total_sideboard
    );
    Ok(())
}

/// Set an entry's quantity; zero or below removes the entry
pub fn execute_set_quantity(
    store: &DeckStore,
    deck_id: &str,
    card_id: &str,
    quantity: i64,
) -> Result<()> {
    let mut deck = store
        .load_deck(deck_id)
        .with_context(|| format!("Failed to load deck {}", deck_id))?;

    deck.set_card_quantity(card_id, quantity)
        .with_context(|| format!("Failed to update card {}", card_id))?;
    store.save_deck(&deck).context("Failed to save deck")?;

    let stats = compute_stats(&deck.cards);
    match deck.card(card_id) {
        Some(entry) => println!("{} now at {} copies", entry.name, entry.quantity),
        None => println!("Card {} removed", card_id),
    }
    println!("{} main / {} side", stats.total_cards, stats.total_sideboard);
    Ok(())
}

/// Remove an entry outright
pub fn execute_remove_card(store: &DeckStore, deck_id: &str, card_id: &str) -> Result<()> {
    let mut deck = store
        .load_deck(deck_id)
        .with_context(|| format!("Failed to load deck {}", deck_id))?;

    deck.remove_card(card_id)
        .with_context(|| format!("Failed to remove card {}", card_id))?;
    store.save_deck(&deck).context("Failed to save deck")?;

    let stats = compute_stats(&deck.cards);
    println!(
        "Card {} removed ({} main / {} side)",
        card_id, stats.total_cards, stats.total_sideboard
    );
    Ok(())
}
