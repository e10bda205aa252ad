//! MTG Deck Studio CLI
//!
//! Build decks from the command line: search cards, manage deck lists,
//! compute statistics and get an offline analysis.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use mtg_deck_studio::commands::{
    execute_add_card, execute_analyze, execute_create_deck, execute_delete_deck,
    execute_list_decks, execute_remove_card, execute_search, execute_set_quantity,
    execute_show_deck, execute_stats, validate_args, StatsArgs,
};
use mtg_deck_studio::model::Board;
use mtg_deck_studio::output::read_report;
use mtg_deck_studio::scryfall::ScryfallClient;
use mtg_deck_studio::store::DeckStore;
use mtg_deck_studio::utils::config::SCHEMA_VERSION;

/// MTG Deck Studio - deck building and statistics for Magic: The Gathering
#[derive(Parser, Debug)]
#[command(name = "deck-studio")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Deck collection directory
    #[arg(
        short,
        long,
        global = true,
        env = "DECK_STUDIO_COLLECTION",
        default_value = "decks"
    )]
    collection: PathBuf,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage decks
    Deck {
        #[command(subcommand)]
        command: DeckCommands,
    },

    /// Manage cards in a deck
    Card {
        #[command(subcommand)]
        command: CardCommands,
    },

    /// Search cards on Scryfall
    Search {
        /// Full-text search query
        query: String,
    },

    /// Compute deck statistics
    Stats {
        /// Deck id
        deck_id: String,

        /// Output path for a JSON report
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the text summary even when writing a report
        #[arg(long)]
        summary: bool,
    },

    /// Analyze a deck and print suggestions
    Analyze {
        /// Deck id
        deck_id: String,
    },

    /// Validate a stats report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

#[derive(Subcommand, Debug)]
enum DeckCommands {
    /// Create a new empty deck
    Create {
        /// Deck name
        #[arg(short, long)]
        name: String,

        /// Play format (Standard, Modern, Commander, ...)
        #[arg(short, long)]
        format: Option<String>,

        /// Free-text description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// List all decks
    List,

    /// Show a deck's cards and statistics
    Show {
        /// Deck id
        deck_id: String,
    },

    /// Delete a deck and its card list
    Delete {
        /// Deck id
        deck_id: String,
    },
}

#[derive(Subcommand, Debug)]
enum CardCommands {
    /// Look up a card by name and add a copy
    Add {
        /// Deck id
        deck_id: String,

        /// Card name (fuzzy matched)
        #[arg(short, long)]
        name: String,

        /// Add to the sideboard instead of the main board
        #[arg(long)]
        sideboard: bool,
    },

    /// Set a card entry's quantity (0 removes it)
    Set {
        /// Deck id
        deck_id: String,

        /// Card entry id
        card_id: String,

        /// New quantity
        #[arg(short, long)]
        quantity: i64,
    },

    /// Remove a card entry
    Remove {
        /// Deck id
        deck_id: String,

        /// Card entry id
        card_id: String,
    },
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let store = DeckStore::new(&cli.collection);

    // Execute command
    match cli.command {
        Commands::Deck { command } => match command {
            DeckCommands::Create {
                name,
                format,
                description,
            } => {
                execute_create_deck(&store, &name, format.as_deref(), description.as_deref())?;
            }
            DeckCommands::List => {
                execute_list_decks(&store)?;
            }
            DeckCommands::Show { deck_id } => {
                execute_show_deck(&store, &deck_id)?;
            }
            DeckCommands::Delete { deck_id } => {
                execute_delete_deck(&store, &deck_id)?;
            }
        },

        Commands::Card { command } => match command {
            CardCommands::Add {
                deck_id,
                name,
                sideboard,
            } => {
                let board = if sideboard {
                    Board::Sideboard
                } else {
                    Board::Main
                };
                let client = ScryfallClient::new()?;
                execute_add_card(&store, &client, &deck_id, &name, board)?;
            }
            CardCommands::Set {
                deck_id,
                card_id,
                quantity,
            } => {
                execute_set_quantity(&store, &deck_id, &card_id, quantity)?;
            }
            CardCommands::Remove { deck_id, card_id } => {
                execute_remove_card(&store, &deck_id, &card_id)?;
            }
        },

        Commands::Search { query } => {
            let client = ScryfallClient::new()?;
            execute_search(&client, &query)?;
        }

        Commands::Stats {
            deck_id,
            output,
            summary,
        } => {
            let args = StatsArgs {
                deck_id,
                collection: cli.collection.clone(),
                output_json: output,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            execute_stats(args)?;
        }

        Commands::Analyze { deck_id } => {
            execute_analyze(&store, &deck_id)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Validate a stats report JSON file
///
/// **Private** - internal command implementation
fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    println!("✓ Valid stats report JSON");
    println!("  Version: {}", report.version);
    println!("  Deck: {} ({})", report.deck_name, report.deck_id);
    println!("  Main deck: {}", report.stats.total_cards);
    println!("  Sideboard: {}", report.stats.total_sideboard);
    println!("  Value: ${:.2}", report.stats.total_value);
    println!("  Generated: {}", report.generated_at);

    Ok(())
}

/// Display version information
///
/// **Private** - internal command implementation
fn display_version() {
    println!("MTG Deck Studio v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Deck building and statistics for Magic: The Gathering.");
}
