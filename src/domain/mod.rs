pub mod dnd;
pub mod enums;
pub mod flashcard;
pub mod pomodoro;
pub mod task;

pub use dnd::DndManager;
pub use enums::Phase;
pub use flashcard::{Deck, Flashcard};
pub use pomodoro::{Pomodoro, PomodoroSettings, TickOutcome};
pub use task::Task;
