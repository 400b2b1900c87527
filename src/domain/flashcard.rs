use crate::validate::{validate_card_amount, validate_flashcard, ValidationError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
}

impl Flashcard {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }
}

/// An ordered deck with a review cursor.
///
/// The cursor always points at a card when the deck is non-empty and is
/// reset to the front side whenever it moves.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    cards: Vec<Flashcard>,
    index: usize,
    showing_back: bool,
}

impl Deck {
    pub fn new(cards: Vec<Flashcard>) -> Self {
        Self {
            cards,
            index: 0,
            showing_back: false,
        }
    }

    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Validate and append a card, trimming both sides
    pub fn add(&mut self, front: &str, back: &str) -> Result<usize, ValidationError> {
        let (front, back) = (front.trim(), back.trim());
        validate_flashcard(front, back)?;

        let new_len = i64::try_from(self.cards.len() + 1).unwrap_or(i64::MAX);
        if !validate_card_amount(new_len) {
            return Err(ValidationError::DeckFull);
        }

        self.cards.push(Flashcard::new(front, back));
        Ok(self.cards.len() - 1)
    }

    /// Remove a card; `None` when the index is out of range
    pub fn remove(&mut self, index: usize) -> Option<Flashcard> {
        if index >= self.cards.len() {
            return None;
        }
        let card = self.cards.remove(index);
        if self.index >= self.cards.len() {
            self.index = self.cards.len().saturating_sub(1);
        }
        self.showing_back = false;
        Some(card)
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&Flashcard> {
        self.cards.get(self.index)
    }

    pub fn is_showing_back(&self) -> bool {
        self.showing_back
    }

    /// Text of the side currently facing up
    pub fn visible_side(&self) -> Option<&str> {
        let card = self.current()?;
        Some(if self.showing_back {
            &card.back
        } else {
            &card.front
        })
    }

    pub fn flip(&mut self) {
        if !self.cards.is_empty() {
            self.showing_back = !self.showing_back;
        }
    }

    /// Move to the next card, wrapping to the first
    pub fn next(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        self.index = (self.index + 1) % self.cards.len();
        self.showing_back = false;
    }

    /// Move to the previous card, wrapping to the last
    pub fn prev(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        self.index = if self.index == 0 {
            self.cards.len() - 1
        } else {
            self.index - 1
        };
        self.showing_back = false;
    }

    /// Jump to a card; returns false when out of range
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.cards.len() {
            return false;
        }
        self.index = index;
        self.showing_back = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_deck() -> Deck {
        Deck::new(vec![
            Flashcard::new("ser", "to be"),
            Flashcard::new("tener", "to have"),
            Flashcard::new("ir", "to go"),
        ])
    }

    #[test]
    fn test_add_trims_and_validates() {
        let mut deck = Deck::default();
        assert_eq!(deck.add("  hola ", " hello  "), Ok(0));
        assert_eq!(deck.cards()[0], Flashcard::new("hola", "hello"));

        assert_eq!(deck.add("   ", "x"), Err(ValidationError::EmptyCardSide));
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn test_add_rejects_beyond_deck_limit() {
        let cards = (0..1000)
            .map(|i| Flashcard::new(format!("q{}", i), "a"))
            .collect();
        let mut deck = Deck::new(cards);
        assert_eq!(deck.add("one more", "card"), Err(ValidationError::DeckFull));
        assert_eq!(deck.len(), 1000);
    }

    #[test]
    fn test_navigation_wraps() {
        let mut deck = sample_deck();
        assert_eq!(deck.visible_side(), Some("ser"));

        deck.next();
        deck.next();
        assert_eq!(deck.visible_side(), Some("ir"));
        deck.next();
        assert_eq!(deck.position(), 0);

        deck.prev();
        assert_eq!(deck.position(), 2);
    }

    #[test]
    fn test_flip_resets_on_move() {
        let mut deck = sample_deck();
        deck.flip();
        assert!(deck.is_showing_back());
        assert_eq!(deck.visible_side(), Some("to be"));

        deck.next();
        assert!(!deck.is_showing_back());
        assert_eq!(deck.visible_side(), Some("tener"));
    }

    #[test]
    fn test_go_to() {
        let mut deck = sample_deck();
        assert!(deck.go_to(1));
        assert_eq!(deck.current().map(|c| c.back.as_str()), Some("to have"));
        assert!(!deck.go_to(3));
        assert_eq!(deck.position(), 1);
    }

    #[test]
    fn test_remove_keeps_cursor_in_range() {
        let mut deck = sample_deck();
        deck.go_to(2);
        assert_eq!(deck.remove(2), Some(Flashcard::new("ir", "to go")));
        assert_eq!(deck.position(), 1);
        assert_eq!(deck.remove(5), None);

        deck.remove(0);
        deck.remove(0);
        assert!(deck.is_empty());
        assert_eq!(deck.current(), None);
        assert_eq!(deck.visible_side(), None);
    }

    #[test]
    fn test_empty_deck_operations_are_noops() {
        let mut deck = Deck::default();
        deck.next();
        deck.prev();
        deck.flip();
        assert!(!deck.is_showing_back());
        assert_eq!(deck.position(), 0);
    }
}
