//! Card search command.

use crate::scryfall::ScryfallClient;
use anyhow::{Context, Result};

/// Search Scryfall and print matches as a table
pub fn execute_search(client: &ScryfallClient, query: &str) -> Result<()> {
    let cards = client
        .search(query)
        .with_context(|| format!("Search failed for query '{}'", query))?;

    if cards.is_empty() {
        println!("No cards matched '{}'", query);
        return Ok(());
    }

    println!("{:<32} {:<12} {:<30} {:>8}", "NAME", "COST", "TYPE", "USD");
    for card in &cards {
        println!(
            "{:<32} {:<12} {:<30} {:>8}",
            truncate(&card.name, 32),
            card.mana_cost,
            truncate(&card.type_line, 30),
            card.price
        );
    }
    println!("{} cards", cards.len());
    Ok(())
}

/// Truncate a display string with an ellipsis
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", cut)
}
