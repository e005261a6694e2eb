//! Chore tracking entries.

use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::Value;

use grocy_core::error::GrocyResult;

use crate::parse;

/// Current tracking state of one chore (`chores`).
#[derive(Debug, Clone, Serialize)]
pub struct Chore {
    pub id: i64,
    pub last_tracked_time: Option<NaiveDateTime>,
    pub next_estimated_execution_time: Option<NaiveDateTime>,
}

impl Chore {
    /// Create a Chore from a server JSON map.
    pub fn from_api_map(map: &Value) -> GrocyResult<Self> {
        Ok(Self {
            id: parse::require_int(map, "chore_id")?,
            last_tracked_time: parse::datetime_field(map, "last_tracked_time")?,
            next_estimated_execution_time: parse::datetime_field(
                map,
                "next_estimated_execution_time",
            )?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chore_from_api_map() {
        let map = json!({
            "chore_id": "1",
            "last_tracked_time": "2020-03-01 08:00:00",
            "next_estimated_execution_time": "2020-03-08 08:00:00"
        });
        let chore = Chore::from_api_map(&map).unwrap();
        assert_eq!(chore.id, 1);
        assert!(chore.last_tracked_time.is_some());
        assert!(chore.next_estimated_execution_time.is_some());
    }

    #[test]
    fn test_never_tracked_chore() {
        let map = json!({"chore_id": "2", "last_tracked_time": null});
        let chore = Chore::from_api_map(&map).unwrap();
        assert!(chore.last_tracked_time.is_none());
    }
}
