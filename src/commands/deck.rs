//! Deck management commands: create, list, show, delete.

use crate::output::render_summary;
use crate::stats::compute_stats;
use crate::store::DeckStore;
use anyhow::{Context, Result};
use log::info;

/// Create a new empty deck and print its id
pub fn execute_create_deck(
    store: &DeckStore,
    name: &str,
    format: Option<&str>,
    description: Option<&str>,
) -> Result<()> {
    let deck = store
        .create_deck(name, format, description)
        .context("Failed to create deck")?;

    println!("Created deck '{}' [{}]", deck.name, deck.format);
    println!("  id: {}", deck.id);
    Ok(())
}

/// List all decks, most recently updated first
pub fn execute_list_decks(store: &DeckStore) -> Result<()> {
    let decks = store.list_decks().context("Failed to list decks")?;

    if decks.is_empty() {
        println!("No decks in {}", store.root().display());
        return Ok(());
    }

    println!("{:<40} {:<12} {:>6}  {}", "ID", "FORMAT", "CARDS", "NAME");
    for deck in &decks {
        let stats = compute_stats(&deck.cards);
        println!(
            "{:<40} {:<12} {:>6}  {}",
            deck.id, deck.format, stats.total_cards, deck.name
        );
    }
    Ok(())
}

/// Show one deck: card list plus statistics summary
pub fn execute_show_deck(store: &DeckStore, deck_id: &str) -> Result<()> {
    let deck = store
        .load_deck(deck_id)
        .with_context(|| format!("Failed to load deck {}", deck_id))?;

    let stats = compute_stats(&deck.cards);
    println!("{}", render_summary(&deck, &stats));

    if !deck.cards.is_empty() {
        println!("Cards:");
        for entry in &deck.cards {
            println!(
                "  {:<6} {:>2}x {:<30} {:<28} [{}]",
                entry.id, entry.quantity, entry.name, entry.type_line, entry.board
            );
        }
    }
    Ok(())
}

/// Delete a deck and its card list
pub fn execute_delete_deck(store: &DeckStore, deck_id: &str) -> Result<()> {
    store
        .delete_deck(deck_id)
        .with_context(|| format!("Failed to delete deck {}", deck_id))?;

    info!("Deck {} deleted", deck_id);
    println!("Deleted deck {}", deck_id);
    Ok(())
}
