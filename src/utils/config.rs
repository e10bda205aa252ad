//! Configuration and constants for the CLI.

use std::time::Duration;

/// Default timeout for Scryfall API requests
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Scryfall REST API base URL
pub const SCRYFALL_API_BASE: &str = "https://api.scryfall.com";

/// Current stats report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Format assigned to decks created without one
pub const DEFAULT_FORMAT: &str = "Standard";

/// Main-deck size minimums per format, used by the analyzer
pub const COMMANDER_DECK_SIZE: u32 = 100;
pub const DEFAULT_DECK_SIZE: u32 = 60;
