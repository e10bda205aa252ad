//! Stats command implementation.
//!
//! The stats command:
//! 1. Loads the deck from the collection
//! 2. Computes the statistics snapshot
//! 3. Writes a JSON report (if requested)
//! 4. Prints a text summary

use crate::output::{render_summary, to_report, write_report};
use crate::stats::compute_stats;
use crate::store::DeckStore;
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;

/// Arguments for the stats command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct StatsArgs {
    /// Deck id to compute statistics for
    pub deck_id: String,

    /// Collection directory
    pub collection: PathBuf,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Print the text summary even when writing a report
    pub print_summary: bool,
}

/// Validate stats arguments
///
/// **Public** - called before execute_stats for early validation
pub fn validate_args(args: &StatsArgs) -> Result<()> {
    if args.deck_id.trim().is_empty() {
        anyhow::bail!("Deck id cannot be empty");
    }

    if args.collection.as_os_str().is_empty() {
        anyhow::bail!("Collection directory cannot be empty");
    }

    if let Some(path) = &args.output_json {
        if path.as_os_str().is_empty() {
            anyhow::bail!("Output path cannot be empty");
        }
        if path.is_dir() {
            anyhow::bail!("Output path is a directory: {}", path.display());
        }
    }

    Ok(())
}

/// Execute the stats command
///
/// **Public** - main entry point called from main.rs
pub fn execute_stats(args: StatsArgs) -> Result<()> {
    info!("Computing statistics for deck: {}", args.deck_id);

    let store = DeckStore::new(&args.collection);
    let deck = store
        .load_deck(&args.deck_id)
        .with_context(|| format!("Failed to load deck {}", args.deck_id))?;

    let stats = compute_stats(&deck.cards);
    debug!(
        "Deck {}: {} main / {} side",
        deck.id, stats.total_cards, stats.total_sideboard
    );

    if let Some(output_path) = &args.output_json {
        let report = to_report(&deck, &stats);
        write_report(&report, output_path).context("Failed to write stats report")?;
        println!("Report written to: {}", output_path.display());
    }

    // Without a report target the summary is the whole point
    if args.print_summary || args.output_json.is_none() {
        println!("{}", render_summary(&deck, &stats));
    }

    Ok(())
}
