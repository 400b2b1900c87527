pub mod datetime;
pub mod error;
pub mod flashcard;
pub mod task;
pub mod timer;

pub use datetime::{validate_date, validate_datetime, validate_time};
pub use error::ValidationError;
pub use flashcard::{
    validate_card_amount, validate_deck, validate_flashcard, validate_source_text,
    validate_string_list,
};
pub use task::{validate_due_date, validate_tags, validate_task_description, validate_task_title};
pub use timer::{validate_long_timer, validate_short_timer, validate_work_timer};
