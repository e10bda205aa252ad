//! Map a free-text type line to a display category.

use crate::model::Category;

/// Categorize a card by its type line
///
/// **Public** - pure function, result is safe to cache on the entry
///
/// Case-insensitive substring match in priority order: a line containing
/// "creature" wins over one containing "land", so a hybrid "Land Creature"
/// type line categorizes as Creatures. Everything else, including the
/// empty string, falls through to Spells.
pub fn categorize(type_line: &str) -> Category {
    let lower = type_line.to_lowercase();

    if lower.contains("creature") {
        Category::Creatures
    } else if lower.contains("land") {
        Category::Lands
    } else {
        // Instants, sorceries, enchantments, artifacts, planeswalkers
        Category::Spells
    }
}
