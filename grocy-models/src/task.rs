//! Task entities.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use serde_json::Value;

use grocy_core::error::GrocyResult;

use crate::parse;

/// A task record (`tasks`).
#[derive(Debug, Clone, Serialize)]
pub struct Task {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub done: bool,
    pub done_timestamp: Option<NaiveDateTime>,
    pub category_id: Option<i64>,
    pub assigned_to_user_id: Option<i64>,
}

impl Task {
    /// Create a Task from a server JSON map.
    pub fn from_api_map(map: &Value) -> GrocyResult<Self> {
        Ok(Self {
            id: parse::require_int(map, "id")?,
            name: parse::require_string(map, "name")?,
            description: parse::non_empty_string_field(map, "description")?,
            due_date: parse::date_field(map, "due_date")?,
            done: parse::bool_field(map, "done")?.unwrap_or(false),
            done_timestamp: parse::datetime_field(map, "done_timestamp")?,
            category_id: parse::int_field(map, "category_id")?,
            assigned_to_user_id: parse::int_field(map, "assigned_to_user_id")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_task_from_api_map() {
        let map = json!({
            "id": "4",
            "name": "Repair the garage door",
            "description": null,
            "due_date": "2020-11-01",
            "done": "0",
            "done_timestamp": null,
            "category_id": "",
            "assigned_to_user_id": "1",
            "row_created_timestamp": "2020-10-02 12:00:04"
        });
        let task = Task::from_api_map(&map).unwrap();
        assert_eq!(task.id, 4);
        assert_eq!(task.name, "Repair the garage door");
        assert!(!task.done);
        assert!(task.done_timestamp.is_none());
        assert_eq!(task.category_id, None);
        assert_eq!(task.assigned_to_user_id, Some(1));
    }

    #[test]
    fn test_completed_task() {
        let map = json!({
            "id": "5",
            "name": "Take out the trash",
            "done": "1",
            "done_timestamp": "2020-10-05 18:30:00"
        });
        let task = Task::from_api_map(&map).unwrap();
        assert!(task.done);
        assert!(task.done_timestamp.is_some());
    }
}
