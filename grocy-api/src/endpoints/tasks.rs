//! Task endpoints.

use chrono::NaiveDateTime;
use serde_json::{json, Map, Value};

use grocy_core::error::GrocyResult;
use grocy_models::parse::DATETIME_FORMAT;
use grocy_models::Task;

use crate::client::GrocyClient;

impl GrocyClient {
    /// Fetch all tasks that are not yet done.
    pub async fn tasks(&self) -> GrocyResult<Vec<Task>> {
        let body = self.get_json("tasks").await?;
        match body.as_ref().and_then(|v| v.as_array()) {
            Some(entries) => entries.iter().map(Task::from_api_map).collect(),
            None => Ok(vec![]),
        }
    }

    /// Mark a task as completed. `done_time` defaults to the server's
    /// current time when absent.
    pub async fn complete_task(
        &self,
        task_id: i64,
        done_time: Option<NaiveDateTime>,
    ) -> GrocyResult<()> {
        let mut body = Map::new();
        if let Some(time) = done_time {
            body.insert(
                "done_time".into(),
                json!(time.format(DATETIME_FORMAT).to_string()),
            );
        }
        self.post(
            &format!("tasks/{task_id}/complete"),
            Some(&Value::Object(body)),
        )
        .await?;
        Ok(())
    }
}
