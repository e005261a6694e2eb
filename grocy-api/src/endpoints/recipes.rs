//! Recipe endpoints.

use grocy_core::error::GrocyResult;
use grocy_models::Recipe;

use crate::client::GrocyClient;

impl GrocyClient {
    /// Fetch a single recipe by id. Yields `None` when the server sends an
    /// empty body.
    pub async fn recipe(&self, recipe_id: i64) -> GrocyResult<Option<Recipe>> {
        let body = self.get_json(&format!("objects/recipes/{recipe_id}")).await?;
        match body {
            Some(map) => Ok(Some(Recipe::from_api_map(&map)?)),
            None => Ok(None),
        }
    }
}
