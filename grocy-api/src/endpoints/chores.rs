//! Chore endpoints.

use chrono::NaiveDateTime;
use serde_json::{json, Map, Value};

use grocy_core::error::GrocyResult;
use grocy_models::parse::DATETIME_FORMAT;
use grocy_models::Chore;

use crate::client::GrocyClient;

impl GrocyClient {
    /// Fetch the current tracking state of all chores.
    pub async fn chores(&self) -> GrocyResult<Vec<Chore>> {
        let body = self.get_json("chores").await?;
        match body.as_ref().and_then(|v| v.as_array()) {
            Some(entries) => entries.iter().map(Chore::from_api_map).collect(),
            None => Ok(vec![]),
        }
    }

    /// Track an execution of a chore. `tracked_time` defaults to the
    /// server's current time when absent.
    pub async fn execute_chore(
        &self,
        chore_id: i64,
        done_by: Option<i64>,
        tracked_time: Option<NaiveDateTime>,
    ) -> GrocyResult<()> {
        let mut body = Map::new();
        if let Some(user_id) = done_by {
            body.insert("done_by".into(), json!(user_id));
        }
        if let Some(time) = tracked_time {
            body.insert(
                "tracked_time".into(),
                json!(time.format(DATETIME_FORMAT).to_string()),
            );
        }
        self.post(
            &format!("chores/{chore_id}/execute"),
            Some(&Value::Object(body)),
        )
        .await?;
        Ok(())
    }
}
