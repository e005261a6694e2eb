//! Userfield endpoints.
//!
//! Userfields are user-defined key/value pairs attached per entity type and
//! object id; values are free-form scalars and stay `serde_json::Value`.

use serde_json::{json, Value};

use grocy_core::error::{GrocyError, GrocyResult};
use grocy_models::Userfields;

use crate::client::GrocyClient;

impl GrocyClient {
    /// Fetch the userfields of one object. An empty response yields an
    /// empty map.
    pub async fn userfields(&self, entity: &str, object_id: i64) -> GrocyResult<Userfields> {
        let body = self
            .get_json(&format!("userfields/{entity}/{object_id}"))
            .await?;
        match body {
            None | Some(Value::Null) => Ok(Userfields::new()),
            Some(Value::Object(map)) => Ok(map.into_iter().collect()),
            Some(other) => Err(GrocyError::Parse(format!(
                "userfields response is not an object: {other}"
            ))),
        }
    }

    /// Set a single userfield on one object.
    pub async fn set_userfield(
        &self,
        entity: &str,
        object_id: i64,
        key: &str,
        value: Value,
    ) -> GrocyResult<()> {
        let body = json!({ key: value });
        self.put(&format!("userfields/{entity}/{object_id}"), &body)
            .await?;
        Ok(())
    }
}
