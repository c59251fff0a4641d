// Task store backed by a single JSON file

use crate::json;
use crate::task::Task;
use eyre::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default storage file name, relative to the working directory
pub const DEFAULT_FILE_NAME: &str = "tasks.json";

/// Persistent task list stored as a JSON array
///
/// The store holds no tasks itself. Callers own the in-memory list and
/// reconcile it with disk through explicit `load` and `save` calls.
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    /// Bind a store to the given storage file. Nothing is touched on disk.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Get the storage file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all tasks, in stored order
    ///
    /// Missing or empty storage yields an empty list. Invalid JSON is an error.
    pub fn load(&self) -> Result<Vec<Task>> {
        debug!(path = ?self.path, "TaskStore::load: called");
        json::read_json_array(&self.path)
    }

    /// Overwrite the storage file with `tasks`
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        debug!(path = ?self.path, count = tasks.len(), "TaskStore::save: called");
        json::write_json_array(&self.path, tasks)
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new(DEFAULT_FILE_NAME)
    }
}
