//! Todo Models
//!
//! Data structures stored in the todo collection.

use serde::{Deserialize, Serialize};

/// Todo identifier (milliseconds since the Unix epoch at creation)
pub type TodoId = u64;

/// Todo data structure (matches the persisted JSON)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
}

impl Todo {
    pub fn new(id: TodoId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
        }
    }
}

/// View selector over the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }

    /// Unknown names fall back to `All`
    pub fn from_str(s: &str) -> Self {
        match s {
            "active" => Filter::Active,
            "completed" => Filter::Completed,
            _ => Filter::All,
        }
    }

    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !todo.completed,
            Filter::Completed => todo.completed,
        }
    }
}

/// Next id from the clock, strictly greater than the last one issued.
pub fn next_id(now_ms: TodoId, last_issued: TodoId) -> TodoId {
    now_ms.max(last_issued.saturating_add(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_todo_is_active() {
        let todo = Todo::new(7, "Buy milk");
        assert_eq!(todo.id, 7);
        assert_eq!(todo.title, "Buy milk");
        assert!(!todo.completed);
    }

    #[test]
    fn test_filter_names() {
        for filter in Filter::ALL {
            assert_eq!(Filter::from_str(filter.as_str()), filter);
        }
        assert_eq!(Filter::from_str("Active"), Filter::All);
        assert_eq!(Filter::from_str(""), Filter::All);
        assert_eq!(Filter::from_str("done"), Filter::All);
    }

    #[test]
    fn test_next_id_follows_clock() {
        assert_eq!(next_id(1_700_000_000_000, 0), 1_700_000_000_000);
        assert_eq!(next_id(1_700_000_000_005, 1_700_000_000_000), 1_700_000_000_005);
    }

    #[test]
    fn test_next_id_same_millisecond() {
        let first = next_id(1_000, 0);
        let second = next_id(1_000, first);
        let third = next_id(999, second);
        assert_eq!(first, 1_000);
        assert_eq!(second, 1_001);
        assert_eq!(third, 1_002);
    }

    #[test]
    fn test_todo_json_shape() {
        let todo = Todo { id: 1, title: "a".to_string(), completed: true };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "title": "a", "completed": true}));
    }
}
