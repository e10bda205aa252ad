//! Aggregate a deck's card list into a statistics snapshot.
//!
//! The aggregation is a single pass over the entries in input order, so
//! the floating-point value total is reproducible for the same input.
//! It is total: malformed entries are defaulted, never rejected.

use crate::model::{Board, CardEntry, Category};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Highest mana curve bucket; costs at or above it land in "7+"
pub const CURVE_MAX_BUCKET: u8 = 7;

/// Statistics snapshot for one deck
///
/// **Public** - returned from compute_stats, embedded in JSON reports
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeckStats {
    /// Total copies on the main board
    pub total_cards: u32,

    /// Total copies on the sideboard
    pub total_sideboard: u32,

    /// Main-board entries grouped by category, input order kept per group
    pub cards_by_category: BTreeMap<Category, Vec<CardEntry>>,

    /// Copies per cost bucket (0..=7), main board only, lands excluded
    pub mana_curve: BTreeMap<u8, u32>,

    /// Collection value over both boards, price * quantity in input order
    pub total_value: f64,
}

impl DeckStats {
    /// Copies in one category on the main board
    pub fn category_count(&self, category: Category) -> u32 {
        self.cards_by_category
            .get(&category)
            .map(|entries| entries.iter().map(|e| e.copies()).sum())
            .unwrap_or(0)
    }

    /// Mean converted mana cost of main-board non-land copies
    ///
    /// Uses the clamped curve buckets, which is what the curve displays.
    /// Returns 0 for a deck with no non-land cards.
    pub fn average_cmc(&self) -> f64 {
        let copies: u32 = self.mana_curve.values().sum();
        if copies == 0 {
            return 0.0;
        }
        let weighted: u32 = self
            .mana_curve
            .iter()
            .map(|(bucket, count)| u32::from(*bucket) * count)
            .sum();
        f64::from(weighted) / f64::from(copies)
    }
}

/// Map a converted mana cost to its curve bucket
///
/// **Public** - shared with the summary renderer
///
/// Clamped to 0..=7; the stored cmc value itself is never mutated.
/// Negative or non-finite costs bucket at 0.
pub fn curve_bucket(cmc: f64) -> u8 {
    let floored = cmc.floor();
    if !(floored >= 0.0) {
        // Catches negatives and NaN in one comparison
        return 0;
    }
    if floored >= f64::from(CURVE_MAX_BUCKET) {
        CURVE_MAX_BUCKET
    } else {
        floored as u8
    }
}

/// Compute the statistics snapshot for a card list
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `entries` - the deck's card entries, both boards
///
/// # Returns
/// A fresh `DeckStats`; the input is not modified. Never fails.
///
/// Sideboard entries contribute only to the sideboard total and the
/// collection value. Lands never contribute to the mana curve: they all
/// cost 0 and would drown the lowest bucket.
pub fn compute_stats(entries: &[CardEntry]) -> DeckStats {
    debug!("Computing statistics over {} entries", entries.len());

    let mut stats = DeckStats::default();

    for entry in entries {
        let copies = entry.copies();

        // Value spans both boards
        stats.total_value += entry.unit_price() * f64::from(copies);

        if entry.board == Board::Sideboard {
            stats.total_sideboard += copies;
            continue;
        }

        stats.total_cards += copies;

        stats
            .cards_by_category
            .entry(entry.category)
            .or_default()
            .push(entry.clone());

        if entry.category != Category::Lands {
            *stats.mana_curve.entry(curve_bucket(entry.cmc)).or_insert(0) += copies;
        }
    }

    debug!(
        "Main {} / side {} / value {:.2}",
        stats.total_cards, stats.total_sideboard, stats.total_value
    );

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(
        name: &str,
        type_line: &str,
        quantity: u32,
        cmc: f64,
        board: Board,
        price: &str,
    ) -> CardEntry {
        CardEntry {
            id: format!("c-{}", name),
            scryfall_id: format!("sf-{}", name),
            name: name.to_string(),
            type_line: type_line.to_string(),
            mana_cost: String::new(),
            cmc,
            quantity,
            category: crate::stats::categorize(type_line),
            board,
            price: price.to_string(),
            image_url: String::new(),
        }
    }

    fn burn_list() -> Vec<CardEntry> {
        vec![
            entry("Mountain", "Land", 20, 0.0, Board::Main, "0.10"),
            entry("Lightning Bolt", "Instant", 4, 1.0, Board::Main, "0.50"),
            entry(
                "Goblin Guide",
                "Creature — Goblin",
                4,
                1.0,
                Board::Main,
                "5.00",
            ),
            entry(
                "Smash to Smithereens",
                "Instant",
                2,
                2.0,
                Board::Sideboard,
                "0.25",
            ),
        ]
    }

    #[test]
    fn test_burn_deck_scenario() {
        let stats = compute_stats(&burn_list());

        assert_eq!(stats.total_cards, 28);
        assert_eq!(stats.total_sideboard, 2);

        assert_eq!(stats.cards_by_category[&Category::Lands].len(), 1);
        assert_eq!(stats.cards_by_category[&Category::Lands][0].name, "Mountain");
        assert_eq!(stats.cards_by_category[&Category::Spells][0].name, "Lightning Bolt");
        assert_eq!(stats.cards_by_category[&Category::Creatures][0].name, "Goblin Guide");

        // Mountain excluded as a land; Bolt and Guide both sit at cost 1
        assert_eq!(stats.mana_curve.len(), 1);
        assert_eq!(stats.mana_curve[&1], 8);

        // 20*0.10 + 4*0.50 + 4*5.00 + 2*0.25
        assert!((stats.total_value - 24.5).abs() < 1e-9);
    }

    #[test]
    fn test_totals_conserve_quantity() {
        let entries = burn_list();
        let stats = compute_stats(&entries);
        let all: u32 = entries.iter().map(|e| e.copies()).sum();
        assert_eq!(stats.total_cards + stats.total_sideboard, all);
    }

    #[test]
    fn test_permutation_invariance() {
        let entries = burn_list();
        let mut reversed = entries.clone();
        reversed.reverse();

        let forward = compute_stats(&entries);
        let backward = compute_stats(&reversed);

        assert_eq!(forward.total_cards, backward.total_cards);
        assert_eq!(forward.total_sideboard, backward.total_sideboard);
        assert_eq!(forward.mana_curve, backward.mana_curve);
        assert!((forward.total_value - backward.total_value).abs() < 1e-9);

        // Per-category relative order follows input order
        let names: Vec<_> = backward.cards_by_category[&Category::Spells]
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["Lightning Bolt"]);
    }

    #[test]
    fn test_lands_only_deck_has_empty_curve() {
        let entries = vec![
            entry("Mountain", "Land", 10, 0.0, Board::Main, "0.10"),
            entry("Island", "Basic Land — Island", 10, 0.0, Board::Main, "0.10"),
        ];
        let stats = compute_stats(&entries);
        assert!(stats.mana_curve.is_empty());
        assert_eq!(stats.total_cards, 20);
    }

    #[test]
    fn test_sideboard_excluded_from_groups_and_curve() {
        let entries = vec![entry(
            "Smash to Smithereens",
            "Instant",
            2,
            2.0,
            Board::Sideboard,
            "0.25",
        )];
        let stats = compute_stats(&entries);

        assert!(stats.cards_by_category.is_empty());
        assert!(stats.mana_curve.is_empty());
        assert_eq!(stats.total_sideboard, 2);
        assert!((stats.total_value - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_curve_bucket_clamps_at_seven() {
        assert_eq!(curve_bucket(0.0), 0);
        assert_eq!(curve_bucket(3.0), 3);
        assert_eq!(curve_bucket(6.9), 6);
        assert_eq!(curve_bucket(7.0), 7);
        assert_eq!(curve_bucket(12.0), 7);
        assert_eq!(curve_bucket(-1.0), 0);
        assert_eq!(curve_bucket(f64::NAN), 0);
    }

    #[test]
    fn test_expensive_cards_share_top_bucket() {
        let entries = vec![
            entry("Emrakul", "Legendary Creature — Eldrazi", 1, 15.0, Board::Main, "40.00"),
            entry("Ulamog", "Legendary Creature — Eldrazi", 1, 10.0, Board::Main, "25.00"),
        ];
        let stats = compute_stats(&entries);
        assert_eq!(stats.mana_curve[&7], 2);
    }

    #[test]
    fn test_unparseable_price_counts_as_zero() {
        let entries = vec![entry("Mystery", "Instant", 3, 1.0, Board::Main, "n/a")];
        let stats = compute_stats(&entries);
        assert_eq!(stats.total_value, 0.0);
    }

    #[test]
    fn test_idempotent_over_unchanged_input() {
        let entries = burn_list();
        let first = compute_stats(&entries);
        let second = compute_stats(&entries);
        assert_eq!(first, second);
        // Input untouched
        assert_eq!(entries[0].quantity, 20);
    }

    #[test]
    fn test_empty_input() {
        let stats = compute_stats(&[]);
        assert_eq!(stats, DeckStats::default());
    }

    #[test]
    fn test_category_count_and_average_cmc() {
        let stats = compute_stats(&burn_list());
        assert_eq!(stats.category_count(Category::Lands), 20);
        assert_eq!(stats.category_count(Category::Creatures), 4);
        assert_eq!(stats.category_count(Category::Spells), 4);
        // All 8 non-land copies cost 1
        assert!((stats.average_cmc() - 1.0).abs() < 1e-9);
    }
}
