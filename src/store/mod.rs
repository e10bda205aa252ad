//! JSON deck store.
//!
//! Decks live as pretty-printed `<deck-id>.json` files under a collection
//! directory. The store owns deck lifecycle (create/list/load/save/delete);
//! card mutations happen on the `Deck` aggregate and are persisted with
//! `save_deck`. Statistics are never stored, only recomputed after a save.

use crate::model::Deck;
use crate::utils::error::StoreError;
use chrono::Utc;
use log::{debug, info, warn};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Directory-backed deck collection
pub struct DeckStore {
    root: PathBuf,
}

impl DeckStore {
    /// Open a store rooted at the given directory
    ///
    /// The directory is created lazily on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The collection directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create and persist a new empty deck
    pub fn create_deck(
        &self,
        name: &str,
        format: Option<&str>,
        description: Option<&str>,
    ) -> Result<Deck, StoreError> {
        if name.trim().is_empty() {
            return Err(StoreError::InvalidName("name cannot be empty".to_string()));
        }

        let id = self.generate_deck_id(name);
        let deck = Deck::new(id, name.trim(), format, description);

        self.save_deck(&deck)?;
        info!("Created deck '{}' ({})", deck.name, deck.id);

        Ok(deck)
    }

    /// List all decks, most recently updated first
    ///
    /// Files that fail to parse are skipped with a warning so one corrupt
    /// deck does not hide the rest of the collection.
    pub fn list_decks(&self) -> Result<Vec<Deck>, StoreError> {
        if !self.root.exists() {
            debug!("Collection directory {} does not exist yet", self.root.display());
            return Ok(Vec::new());
        }

        let mut decks = Vec::new();

        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().map(|ext| ext == "json") != Some(true) {
                continue;
            }

            match read_deck_file(&path) {
                Ok(deck) => decks.push(deck),
                Err(err) => warn!("Skipping unreadable deck file {}: {}", path.display(), err),
            }
        }

        decks.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

        debug!("Listed {} decks from {}", decks.len(), self.root.display());
        Ok(decks)
    }

    /// Load a deck by id
    pub fn load_deck(&self, deck_id: &str) -> Result<Deck, StoreError> {
        let path = self.deck_path(deck_id);
        if !path.exists() {
            return Err(StoreError::DeckNotFound(deck_id.to_string()));
        }
        read_deck_file(&path)
    }

    /// Persist a deck, creating the collection directory if needed
    pub fn save_deck(&self, deck: &Deck) -> Result<(), StoreError> {
        if deck.id.trim().is_empty() {
            return Err(StoreError::InvalidName("deck id cannot be empty".to_string()));
        }

        if self.root.exists() && !self.root.is_dir() {
            return Err(StoreError::InvalidPath(format!(
                "Collection path is not a directory: {}",
                self.root.display()
            )));
        }

        if !self.root.exists() {
            debug!("Creating collection directory: {}", self.root.display());
            fs::create_dir_all(&self.root)?;
        }

        let path = self.deck_path(&deck.id);
        let file = File::create(&path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, deck)?;

        debug!("Saved deck {} to {}", deck.id, path.display());
        Ok(())
    }

    /// Delete a deck and its card list
    pub fn delete_deck(&self, deck_id: &str) -> Result<(), StoreError> {
        let path = self.deck_path(deck_id);
        if !path.exists() {
            return Err(StoreError::DeckNotFound(deck_id.to_string()));
        }

        fs::remove_file(&path)?;
        info!("Deleted deck {}", deck_id);
        Ok(())
    }

    fn deck_path(&self, deck_id: &str) -> PathBuf {
        self.root.join(format!("{}.json", deck_id))
    }

    /// Derive a store-unique id from the deck name
    ///
    /// Slug plus creation milliseconds; a numeric suffix resolves the
    /// rare collision from creating same-named decks within one tick.
    fn generate_deck_id(&self, name: &str) -> String {
        let base = format!("{}-{}", slugify(name), Utc::now().timestamp_millis());

        if !self.deck_path(&base).exists() {
            return base;
        }

        let mut counter = 2;
        loop {
            let candidate = format!("{}-{}", base, counter);
            if !self.deck_path(&candidate).exists() {
                return candidate;
            }
            counter += 1;
        }
    }
}

fn read_deck_file(path: &Path) -> Result<Deck, StoreError> {
    let file = File::open(path)?;
    let deck: Deck = serde_json::from_reader(file)?;
    Ok(deck)
}

/// Lowercased alphanumeric slug, runs of other characters collapse to `-`
fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_was_dash = true;

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_was_dash = false;
        } else if !last_was_dash {
            slug.push('-');
            last_was_dash = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    if slug.is_empty() {
        "deck".to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Mono Red Burn"), "mono-red-burn");
        assert_eq!(slugify("  Jeskai!! Control  "), "jeskai-control");
        assert_eq!(slugify("UW"), "uw");
        assert_eq!(slugify("???"), "deck");
    }

    #[test]
    fn test_create_requires_a_name() {
        let dir = tempfile::tempdir().unwrap();
        let store = DeckStore::new(dir.path());
        assert!(store.create_deck("   ", None, None).is_err());
    }

    #[test]
    fn test_load_missing_deck_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = DeckStore::new(dir.path());
        let err = store.load_deck("nope").unwrap_err();
        assert!(matches!(err, StoreError::DeckNotFound(_)));
    }

    #[test]
    fn test_list_on_missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = DeckStore::new(dir.path().join("never-created"));
        assert!(store.list_decks().unwrap().is_empty());
    }
}
