//! Text summary renderer for stdout.

use crate::model::{Category, Deck};
use crate::stats::compute::CURVE_MAX_BUCKET;
use crate::stats::DeckStats;
use std::fmt::Write;

/// Longest histogram bar in characters
const MAX_BAR_WIDTH: u32 = 40;

/// Render a deck's statistics as a text block
///
/// **Public** - used by `deck show` and `stats --summary`
pub fn render_summary(deck: &Deck, stats: &DeckStats) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail; ignore the fmt::Result plumbing
    let _ = writeln!(out, "{} [{}]", deck.name, deck.format);
    if !deck.description.is_empty() {
        let _ = writeln!(out, "{}", deck.description);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Main deck:  {} cards", stats.total_cards);
    let _ = writeln!(out, "Sideboard:  {} cards", stats.total_sideboard);
    let _ = writeln!(out, "Value:      ${:.2}", stats.total_value);
    let _ = writeln!(out);

    let _ = writeln!(out, "Categories (main):");
    for category in [Category::Creatures, Category::Spells, Category::Lands] {
        let count = stats.category_count(category);
        let distinct = stats
            .cards_by_category
            .get(&category)
            .map(|entries| entries.len())
            .unwrap_or(0);
        let _ = writeln!(out, "  {:<10} {:>3} ({} distinct)", category, count, distinct);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Mana curve (non-land):");

    let peak = stats.mana_curve.values().copied().max().unwrap_or(0);
    for bucket in 0..=CURVE_MAX_BUCKET {
        let count = stats.mana_curve.get(&bucket).copied().unwrap_or(0);
        let label = if bucket == CURVE_MAX_BUCKET {
            "7+".to_string()
        } else {
            bucket.to_string()
        };
        let _ = writeln!(out, "  {:>2} {:<40} {}", label, bar(count, peak), count);
    }

    out
}

/// Histogram bar scaled against the tallest bucket
fn bar(count: u32, peak: u32) -> String {
    if count == 0 || peak == 0 {
        return String::new();
    }
    // Widen before multiplying so huge bucket counts cannot overflow;
    // at least one mark for any non-empty bucket
    let width = ((u64::from(count) * u64::from(MAX_BAR_WIDTH)) / u64::from(peak)).max(1);
    "#".repeat(width as usize)
}
