// Task record and priority display

use colored::{ColoredString, Colorize};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single entry in the task list
///
/// Tasks carry no identifier: their position in the list is their number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    pub priority: String,
}

impl Task {
    pub fn new(title: impl Into<String>, priority: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            priority: priority.into(),
        }
    }

    /// Display classification of the free-text priority
    pub fn level(&self) -> PriorityLevel {
        PriorityLevel::classify(&self.priority)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (priority: {})", self.title, self.level().paint(&self.priority))
    }
}

/// Coarse priority buckets, used only for coloring output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityLevel {
    High,
    Medium,
    Low,
    Other,
}

impl PriorityLevel {
    /// Classify a priority string. Never fails; unknown text is `Other`.
    pub fn classify(priority: &str) -> Self {
        match priority.trim().to_lowercase().as_str() {
            "high" | "высокий" => PriorityLevel::High,
            "medium" | "средний" => PriorityLevel::Medium,
            "low" | "низкий" => PriorityLevel::Low,
            _ => PriorityLevel::Other,
        }
    }

    pub fn paint(self, text: &str) -> ColoredString {
        match self {
            PriorityLevel::High => text.red().bold(),
            PriorityLevel::Medium => text.yellow(),
            PriorityLevel::Low => text.green(),
            PriorityLevel::Other => text.normal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_serialization() {
        let task = Task::new("Купить молоко", "Высокий");
        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(json, r#"{"title":"Купить молоко","priority":"Высокий"}"#);
    }

    #[test]
    fn test_task_deserialization_ignores_key_order() {
        let task: Task = serde_json::from_str(r#"{"priority":"Low","title":"Rest"}"#).unwrap();
        assert_eq!(task, Task::new("Rest", "Low"));
    }

    #[test]
    fn test_priority_classification() {
        assert_eq!(PriorityLevel::classify("Высокий"), PriorityLevel::High);
        assert_eq!(PriorityLevel::classify("средний"), PriorityLevel::Medium);
        assert_eq!(PriorityLevel::classify(" LOW "), PriorityLevel::Low);
        assert_eq!(PriorityLevel::classify("urgent"), PriorityLevel::Other);
        assert_eq!(PriorityLevel::classify(""), PriorityLevel::Other);
    }

    #[test]
    fn test_display_contains_title_and_priority() {
        let rendered = Task::new("Учеба", "Высокий").to_string();
        assert!(rendered.contains("Учеба"));
        assert!(rendered.contains("Высокий"));
    }
}
