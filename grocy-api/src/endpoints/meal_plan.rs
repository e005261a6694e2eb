//! Meal plan endpoints.

use grocy_core::error::GrocyResult;
use grocy_models::MealPlanItem;

use crate::client::GrocyClient;

impl GrocyClient {
    /// Fetch the full meal plan.
    pub async fn meal_plan(&self) -> GrocyResult<Vec<MealPlanItem>> {
        let body = self.get_json("objects/meal_plan").await?;
        match body.as_ref().and_then(|v| v.as_array()) {
            Some(entries) => entries.iter().map(MealPlanItem::from_api_map).collect(),
            None => Ok(vec![]),
        }
    }
}
