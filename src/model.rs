//! The todo entity and its request payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Todo {
    pub id: i32,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    /// `None` covers both a missing and an explicit null `title`; the handler
    /// owns the resulting 400.
    pub title: Option<String>,
}

/// Full overwrite of the two mutable fields; no partial form.
#[derive(Debug, Deserialize)]
pub struct UpdateTodo {
    pub title: String,
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_all_wire_fields() {
        let todo = Todo {
            id: 1,
            title: "Acheter du lait".to_string(),
            completed: false,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["title"], "Acheter du lait");
        assert_eq!(json["completed"], false);
        assert!(json["created_at"].is_string());
    }

    #[test]
    fn create_accepts_missing_title() {
        let input: CreateTodo = serde_json::from_str("{}").unwrap();
        assert!(input.title.is_none());
    }

    #[test]
    fn create_treats_null_title_as_absent() {
        let input: CreateTodo = serde_json::from_str(r#"{"title":null}"#).unwrap();
        assert!(input.title.is_none());
    }

    #[test]
    fn update_requires_both_fields() {
        let missing_completed: Result<UpdateTodo, _> = serde_json::from_str(r#"{"title":"x"}"#);
        assert!(missing_completed.is_err());
        let missing_title: Result<UpdateTodo, _> = serde_json::from_str(r#"{"completed":true}"#);
        assert!(missing_title.is_err());
    }

    #[test]
    fn update_parses_full_body() {
        let input: UpdateTodo =
            serde_json::from_str(r#"{"title":"Relire le rapport","completed":true}"#).unwrap();
        assert_eq!(input.title, "Relire le rapport");
        assert!(input.completed);
    }
}
