pub mod card_store;
pub mod error;
pub mod files;
pub mod task_store;

pub use card_store::CardStore;
pub use files::{atomic_write, ensure_data_dir, init_local_data_dir, CARDS_FILE, TASKS_FILE};
pub use task_store::{NewTask, TaskStore};
