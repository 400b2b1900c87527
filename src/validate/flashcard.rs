use super::error::ValidationError;

pub const FLASHCARD_MAX_LEN: usize = 200;
pub const MAX_DECK_CARDS: i64 = 1000;
/// Exclusive upper bound for entries checked by [`validate_string_list`]
pub const STRING_LIST_MAX_LEN: usize = 255;

/// A card needs text on both sides, each at most [`FLASHCARD_MAX_LEN`] chars.
pub fn validate_flashcard(front: &str, back: &str) -> Result<(), ValidationError> {
    if front.trim().is_empty() || back.trim().is_empty() {
        return Err(ValidationError::EmptyCardSide);
    }
    if front.chars().count() > FLASHCARD_MAX_LEN || back.chars().count() > FLASHCARD_MAX_LEN {
        return Err(ValidationError::CardSideTooLong(FLASHCARD_MAX_LEN));
    }
    Ok(())
}

pub fn validate_card_amount(amount: i64) -> bool {
    (1..=MAX_DECK_CARDS).contains(&amount)
}

/// Any present size is accepted, including zero and negatives.
///
/// Whether this should be narrowed to [`validate_card_amount`]'s range is
/// still undecided, so callers that need a real bound use that instead.
pub fn validate_deck(size: Option<i64>) -> bool {
    size.is_some()
}

/// Non-empty. There is deliberately no upper bound here.
pub fn validate_source_text(text: &str) -> bool {
    !text.is_empty()
}

pub fn validate_string_list(items: &[&str]) -> bool {
    items
        .iter()
        .all(|item| (1..STRING_LIST_MAX_LEN).contains(&item.chars().count()))
}
