use thiserror::Error;

/// Why a field was rejected. The display text is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Task title cannot be empty!")]
    EmptyTitle,
    #[error("Task title must be between 1 and 100 characters!")]
    TitleLength,
    #[error("{field} contains dangerous pattern: {pattern}")]
    DangerousPattern {
        field: &'static str,
        pattern: &'static str,
    },
    #[error("Task title contains invalid characters!")]
    InvalidTitleCharacters,
    #[error("Description too long! Maximum 500 characters allowed.")]
    DescriptionTooLong,
    #[error("Invalid date format! Use MM/DD/YYYY (e.g., 12/31/2025)")]
    DateFormat,
    #[error("Invalid date! Please check the day/month values.")]
    ImpossibleDate,
    #[error("Due date cannot be in the past!")]
    DateInPast,
    #[error("Due date too far in the future! Maximum 5 years allowed.")]
    DateTooFar,
    #[error("Invalid time! Use HH:MM in 24-hour format (e.g., 17:30)")]
    TimeFormat,
    #[error("Due time has already passed!")]
    TimeInPast,
    #[error("A due time needs a due date!")]
    TimeWithoutDate,
    #[error("Too many tags! Maximum 10 tags allowed.")]
    TooManyTags,
    #[error("Each tag must be 1-20 characters!")]
    TagLength,
    #[error("Invalid tag '{0}'! Use only letters, numbers, and hyphens.")]
    InvalidTag(String),
    #[error("Both sides of a flashcard need text!")]
    EmptyCardSide,
    #[error("Flashcard sides are limited to {0} characters!")]
    CardSideTooLong(usize),
    #[error("A deck holds between 1 and 1000 cards!")]
    DeckFull,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_value() {
        let err = ValidationError::DangerousPattern {
            field: "Task title",
            pattern: "<script",
        };
        assert_eq!(err.to_string(), "Task title contains dangerous pattern: <script");

        let err = ValidationError::InvalidTag("a b".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid tag 'a b'! Use only letters, numbers, and hyphens."
        );
    }
}
