//! Generic object endpoints (`objects/{entity}`).
//!
//! Every Grocy entity is reachable through the generic objects API; the
//! typed endpoints elsewhere in this crate are built on the same paths.

use serde_json::Value;

use grocy_core::constants::entity;
use grocy_core::error::GrocyResult;
use grocy_models::Group;

use crate::client::GrocyClient;

impl GrocyClient {
    /// Fetch all objects of an entity type as raw JSON maps.
    pub async fn objects(&self, entity: &str) -> GrocyResult<Vec<Value>> {
        let body = self.get_json(&format!("objects/{entity}")).await?;
        match body {
            Some(Value::Array(entries)) => Ok(entries),
            _ => Ok(vec![]),
        }
    }

    /// Add an object of an entity type. Yields the server's response body
    /// when it sends one (typically the created object id).
    pub async fn add_generic(&self, entity: &str, data: &Value) -> GrocyResult<Option<Value>> {
        let resp = self.post(&format!("objects/{entity}"), Some(data)).await?;
        Self::response_json(resp).await
    }

    /// Update an object of an entity type by id.
    pub async fn update_generic(
        &self,
        entity: &str,
        object_id: i64,
        data: &Value,
    ) -> GrocyResult<()> {
        self.put(&format!("objects/{entity}/{object_id}"), data)
            .await?;
        Ok(())
    }

    /// Fetch all product groups.
    pub async fn product_groups(&self) -> GrocyResult<Vec<Group>> {
        let entries = self.objects(entity::PRODUCT_GROUPS).await?;
        entries.iter().map(Group::from_api_map).collect()
    }
}
