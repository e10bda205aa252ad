//! Offline deck analysis.
//!
//! Produces a score, grade, summary and concrete suggestions from a
//! deck's statistics snapshot. The analysis is a pure function of
//! (deck, stats): no network, deterministic, reproducible in tests.

use crate::model::{Category, Deck};
use crate::stats::DeckStats;
use crate::utils::config::{COMMANDER_DECK_SIZE, DEFAULT_DECK_SIZE};
use serde::{Deserialize, Serialize};

/// Share of the main deck that should be lands
const LAND_RATIO_TARGET: f64 = 0.40;

/// A concrete improvement suggestion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub title: String,
    pub detail: String,
}

/// Analysis result for one deck
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckAnalysis {
    /// 0..=100
    pub score: u8,

    /// Letter grade derived from the score
    pub grade: String,

    /// One-sentence characterization of the deck
    pub summary: String,

    /// Ordered list of improvement suggestions
    pub suggestions: Vec<Suggestion>,
}

/// Analyze a deck from its statistics
///
/// **Public** - main entry point, used by the analyze command
pub fn analyze_deck(deck: &Deck, stats: &DeckStats) -> DeckAnalysis {
    let target_size = target_deck_size(&deck.format);
    let mut suggestions = Vec::new();

    if stats.total_cards == 0 {
        return DeckAnalysis {
            score: 0,
            grade: "F".to_string(),
            summary: format!("This {} deck is empty.", deck.format),
            suggestions: vec![Suggestion {
                title: "Add cards".to_string(),
                detail: format!("A {} main deck needs {} cards.", deck.format, target_size),
            }],
        };
    }

    let mut score: i32 = 100;

    // Deck size against the format minimum
    if stats.total_cards < target_size {
        let deficit = target_size - stats.total_cards;
        score -= i32::try_from(deficit).unwrap_or(30).min(30);
        suggestions.push(Suggestion {
            title: "Fill out the main deck".to_string(),
            detail: format!(
                "{} of {} cards; {} more needed for {}.",
                stats.total_cards, target_size, deficit, deck.format
            ),
        });
    } else if stats.total_cards > target_size {
        // Legal but dilutes consistency
        let excess = stats.total_cards - target_size;
        score -= i32::try_from(excess / 2).unwrap_or(10).min(10);
        suggestions.push(Suggestion {
            title: "Trim the main deck".to_string(),
            detail: format!(
                "{} cards is {} over the {}-card target; cutting to the minimum improves consistency.",
                stats.total_cards, excess, target_size
            ),
        });
    }

    // Land ratio
    let lands = stats.category_count(Category::Lands);
    let ratio = f64::from(lands) / f64::from(stats.total_cards);
    let drift = (ratio - LAND_RATIO_TARGET).abs();
    score -= ((drift * 100.0).round() as i32).min(25);
    if drift > 0.05 {
        let target_lands = (LAND_RATIO_TARGET * f64::from(target_size)).round() as u32;
        suggestions.push(Suggestion {
            title: "Adjust the land count".to_string(),
            detail: format!(
                "{} lands in {} cards; around {} lands suits a {}-card deck.",
                lands, stats.total_cards, target_lands, target_size
            ),
        });
    }

    // Curve shape
    let avg_cmc = stats.average_cmc();
    if avg_cmc > 4.0 {
        score -= 15;
        suggestions.push(Suggestion {
            title: "Flatten the mana curve".to_string(),
            detail: format!(
                "Average cost {:.1} is top-heavy; add early plays below three mana.",
                avg_cmc
            ),
        });
    } else if avg_cmc > 3.0 {
        score -= 5;
    }

    if stats.total_sideboard == 0 {
        suggestions.push(Suggestion {
            title: "Build a sideboard".to_string(),
            detail: "A 15-card reserve covers bad matchups between games.".to_string(),
        });
    }

    let score = score.clamp(0, 100) as u8;

    DeckAnalysis {
        score,
        grade: grade_for(score),
        summary: format!(
            "This {} deck leans {} with an average cost of {:.1} across {} main-deck cards.",
            deck.format,
            archetype_lean(avg_cmc),
            avg_cmc,
            stats.total_cards
        ),
        suggestions,
    }
}

/// Main-deck size target for a format
fn target_deck_size(format: &str) -> u32 {
    if format.to_lowercase().contains("commander") {
        COMMANDER_DECK_SIZE
    } else {
        DEFAULT_DECK_SIZE
    }
}

/// Archetype lean by average cost
fn archetype_lean(avg_cmc: f64) -> &'static str {
    if avg_cmc < 2.5 {
        "aggressive"
    } else if avg_cmc < 3.5 {
        "toward midrange"
    } else {
        "controlling"
    }
}

/// Letter grade with a plus for the top of each band
fn grade_for(score: u8) -> String {
    let letter = match score {
        90..=100 => "A",
        80..=89 => "B",
        70..=79 => "C",
        60..=69 => "D",
        _ => return "F".to_string(),
    };

    if score % 10 >= 7 && score < 100 {
        format!("{}+", letter)
    } else {
        letter.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Board, CardEntry};
    use crate::stats::{categorize, compute_stats};

    fn entry(name: &str, type_line: &str, quantity: u32, cmc: f64, board: Board) -> CardEntry {
        CardEntry {
            id: format!("c-{}", name),
            scryfall_id: format!("sf-{}", name),
            name: name.to_string(),
            type_line: type_line.to_string(),
            mana_cost: String::new(),
            cmc,
            quantity,
            category: categorize(type_line),
            board,
            price: "0.00".to_string(),
            image_url: String::new(),
        }
    }

    fn tuned_deck() -> Vec<CardEntry> {
        vec![
            entry("Mountain", "Land", 24, 0.0, Board::Main),
            entry("Goblin Guide", "Creature — Goblin", 4, 1.0, Board::Main),
            entry("Monastery Swiftspear", "Creature — Human Monk", 4, 1.0, Board::Main),
            entry("Lightning Bolt", "Instant", 4, 1.0, Board::Main),
            entry("Lava Spike", "Sorcery — Arcane", 4, 1.0, Board::Main),
            entry("Searing Blaze", "Instant", 4, 2.0, Board::Main),
            entry("Skewer the Critics", "Sorcery", 4, 1.0, Board::Main),
            entry("Light Up the Stage", "Sorcery", 4, 3.0, Board::Main),
            entry("Eidolon", "Enchantment Creature — Spirit", 4, 2.0, Board::Main),
            entry("Rift Bolt", "Sorcery", 4, 3.0, Board::Main),
            entry("Smash to Smithereens", "Instant", 4, 2.0, Board::Sideboard),
        ]
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let deck = Deck::new("d1", "Burn", Some("Modern"), None);
        let stats = compute_stats(&tuned_deck());
        let first = analyze_deck(&deck, &stats);
        let second = analyze_deck(&deck, &stats);
        assert_eq!(first.score, second.score);
        assert_eq!(first.summary, second.summary);
    }

    #[test]
    fn test_tuned_deck_scores_high_with_no_size_complaints() {
        let deck = Deck::new("d1", "Burn", Some("Modern"), None);
        let stats = compute_stats(&tuned_deck());
        let analysis = analyze_deck(&deck, &stats);

        assert!(analysis.score >= 90, "score was {}", analysis.score);
        assert!(analysis
            .suggestions
            .iter()
            .all(|s| s.title != "Fill out the main deck"));
        assert!(analysis.summary.contains("aggressive"));
    }

    #[test]
    fn test_empty_deck_fails() {
        let deck = Deck::new("d1", "New Deck", None, None);
        let stats = compute_stats(&[]);
        let analysis = analyze_deck(&deck, &stats);

        assert_eq!(analysis.score, 0);
        assert_eq!(analysis.grade, "F");
        assert_eq!(analysis.suggestions.len(), 1);
    }

    #[test]
    fn test_short_deck_gets_size_suggestion() {
        let deck = Deck::new("d1", "Sketch", None, None);
        let stats = compute_stats(&[entry("Mountain", "Land", 8, 0.0, Board::Main)]);
        let analysis = analyze_deck(&deck, &stats);

        assert!(analysis
            .suggestions
            .iter()
            .any(|s| s.title == "Fill out the main deck"));
        assert!(analysis.score < 90);
    }

    #[test]
    fn test_commander_target_size() {
        assert_eq!(target_deck_size("Commander"), 100);
        assert_eq!(target_deck_size("commander (EDH)"), 100);
        assert_eq!(target_deck_size("Modern"), 60);
    }

    #[test]
    fn test_grades() {
        assert_eq!(grade_for(100), "A");
        assert_eq!(grade_for(97), "A+");
        assert_eq!(grade_for(85), "B");
        assert_eq!(grade_for(88), "B+");
        assert_eq!(grade_for(70), "C");
        assert_eq!(grade_for(42), "F");
    }
}
