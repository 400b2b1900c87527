use crate::validate::task::parse_due_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single to-do entry.
///
/// Serialized as one object of the task file's JSON array. `due_time` and
/// `tags` are only written when set, so a plain task keeps the four-key shape
/// `header`, `description`, `due_date`, `completed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub header: String,
    #[serde(default)]
    pub description: String,
    /// `MM/DD/YYYY`, or empty when the task has no due date
    #[serde(default)]
    pub due_date: String,
    /// `HH:MM`, only meaningful alongside `due_date`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub due_time: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    pub fn new(header: String, description: String, due_date: String) -> Self {
        Self {
            header,
            description,
            due_date,
            due_time: String::new(),
            tags: Vec::new(),
            completed: false,
        }
    }

    pub fn has_due_date(&self) -> bool {
        !self.due_date.is_empty()
    }

    /// Parsed due date, `None` when absent or unreadable
    pub fn due_on(&self) -> Option<NaiveDate> {
        if !self.has_due_date() {
            return None;
        }
        parse_due_date(self.due_date.trim()).ok()
    }

    /// Open and due strictly before `today`
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_on().is_some_and(|due| due < today)
    }

    /// Checkbox glyph used in listings
    pub fn check_mark(&self) -> &'static str {
        if self.completed {
            "[x]"
        } else {
            "[ ]"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_task_is_open() {
        let task = Task::new("Read chapter 3".into(), String::new(), String::new());
        assert!(!task.completed);
        assert!(!task.has_due_date());
        assert_eq!(task.check_mark(), "[ ]");
    }

    #[test]
    fn test_plain_task_serializes_to_four_keys() {
        let task = Task::new("Essay".into(), "Draft intro".into(), "11/15/2026".into());
        let value = serde_json::to_value(&task).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<_> = object.keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["completed", "description", "due_date", "header"]);
    }

    #[test]
    fn test_missing_optional_keys_default() {
        let task: Task = serde_json::from_str(r#"{"header": "Only a header"}"#).unwrap();
        assert_eq!(task.header, "Only a header");
        assert_eq!(task.description, "");
        assert_eq!(task.due_date, "");
        assert!(task.tags.is_empty());
        assert!(!task.completed);
    }

    #[test]
    fn test_overdue() {
        let today = NaiveDate::from_ymd_opt(2026, 5, 2).unwrap();
        let mut task = Task::new("Lab report".into(), String::new(), "05/01/2026".into());
        assert!(task.is_overdue(today));

        task.completed = true;
        assert!(!task.is_overdue(today));

        let undated = Task::new("Someday".into(), String::new(), String::new());
        assert!(!undated.is_overdue(today));
    }
}
