//! Deck analysis command.

use crate::analysis::analyze_deck;
use crate::stats::compute_stats;
use crate::store::DeckStore;
use anyhow::{Context, Result};

/// Analyze a deck and print the report
pub fn execute_analyze(store: &DeckStore, deck_id: &str) -> Result<()> {
    let deck = store
        .load_deck(deck_id)
        .with_context(|| format!("Failed to load deck {}", deck_id))?;

    let stats = compute_stats(&deck.cards);
    let analysis = analyze_deck(&deck, &stats);

    println!("{} [{}]", deck.name, deck.format);
    println!("Score: {}/100 ({})", analysis.score, analysis.grade);
    println!();
    println!("{}", analysis.summary);

    if !analysis.suggestions.is_empty() {
        println!();
        println!("Suggestions:");
        for suggestion in &analysis.suggestions {
            println!("  - {}: {}", suggestion.title, suggestion.detail);
        }
    }
    Ok(())
}
