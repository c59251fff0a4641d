// tasklist - minimal task list manager backed by a JSON file

pub mod config;
pub mod console;
pub mod json;
pub mod manager;
pub mod store;
pub mod task;

// Re-export main types for convenience
pub use console::Console;
pub use manager::{DeleteOutcome, TaskManager};
pub use store::TaskStore;
pub use task::{PriorityLevel, Task};
