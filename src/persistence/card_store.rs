use super::error::{StoreError, StoreResult};
use super::files::{atomic_write, load_json_list};
use crate::domain::{Deck, Flashcard};
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Flashcard deck backed by a JSON array of `{front, back}` objects.
///
/// Same load and save rules as [`super::TaskStore`].
#[derive(Debug)]
pub struct CardStore {
    path: PathBuf,
    deck: Deck,
}

impl CardStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let cards: Vec<Flashcard> = load_json_list(&path);
        Self {
            path,
            deck: Deck::new(cards),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Mutable access for review navigation; does not persist
    pub fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    pub fn save(&self) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(self.deck.cards())
            .context("Failed to serialize flashcards")
            .map_err(StoreError::Save)?;
        atomic_write(&self.path, &json).map_err(|e| {
            log::error!("event=save_failed path={} error={:#}", self.path.display(), e);
            StoreError::Save(e)
        })
    }

    pub fn add(&mut self, front: &str, back: &str) -> StoreResult<usize> {
        let index = self.deck.add(front, back)?;
        log::info!("event=card_added index={}", index);
        self.save()?;
        Ok(index)
    }

    pub fn remove(&mut self, index: usize) -> StoreResult<Option<Flashcard>> {
        let Some(card) = self.deck.remove(index) else {
            log::debug!("event=ignored op=remove_card index={}", index);
            return Ok(None);
        };
        self.save()?;
        Ok(Some(card))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::ValidationError;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_add_and_reopen() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("cards.json");

        let mut store = CardStore::open(&path);
        assert!(store.deck().is_empty());
        store.add("photosynthesis", "light to sugar").unwrap();
        store.add("osmosis", "water across a membrane").unwrap();

        let reopened = CardStore::open(&path);
        assert_eq!(reopened.deck().cards(), store.deck().cards());
    }

    #[test]
    fn test_invalid_card_is_not_saved() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("cards.json");

        let mut store = CardStore::open(&path);
        let err = store.add("front only", "  ").unwrap_err();
        assert!(matches!(err, StoreError::Invalid(ValidationError::EmptyCardSide)));
        assert!(!path.exists());
    }

    #[test]
    fn test_remove() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("cards.json");
        fs::write(&path, r#"[{"front": "a", "back": "1"}, {"front": "b", "back": "2"}]"#).unwrap();

        let mut store = CardStore::open(&path);
        assert_eq!(store.remove(0).unwrap(), Some(Flashcard::new("a", "1")));
        assert_eq!(store.remove(4).unwrap(), None);
        assert_eq!(CardStore::open(&path).deck().cards(), &[Flashcard::new("b", "2")]);
    }

    #[test]
    fn test_failed_save_keeps_card_in_memory() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("cards.json");
        fs::create_dir(&path).unwrap();

        let mut store = CardStore::open(&path);
        let err = store.add("mitosis", "cell division").unwrap_err();
        assert!(matches!(err, StoreError::Save(_)));
        assert_eq!(store.deck().cards(), &[Flashcard::new("mitosis", "cell division")]);
    }

    #[test]
    fn test_failed_save_leaves_target_untouched() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("cards.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep.txt"), "earlier contents").unwrap();

        let mut store = CardStore::open(&path);
        assert!(store.add("mitosis", "cell division").is_err());

        assert!(path.is_dir());
        assert_eq!(fs::read_to_string(path.join("keep.txt")).unwrap(), "earlier contents");
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_corrupt_file_opens_empty() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("cards.json");
        fs::write(&path, "not json at all").unwrap();
        assert!(CardStore::open(&path).deck().is_empty());
    }
}
