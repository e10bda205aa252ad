//! Command implementations.
//!
//! Each subcommand gets a thin executor that wires the store, the
//! Scryfall client and the statistics core together. Argument structs
//! and validation live next to the executor that consumes them.

pub mod analyze;
pub mod card;
pub mod deck;
pub mod search;
pub mod stats;

pub use analyze::execute_analyze;
pub use card::{execute_add_card, execute_remove_card, execute_set_quantity};
pub use deck::{execute_create_deck, execute_delete_deck, execute_list_decks, execute_show_deck};
pub use search::execute_search;
pub use stats::{execute_stats, validate_args, StatsArgs};
