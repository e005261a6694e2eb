//! Meal plan entries.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use serde_json::Value;

use grocy_core::error::GrocyResult;

use crate::parse;

/// What a meal plan entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MealPlanItemType {
    Recipe,
    Product,
    Note,
    Unknown,
}

impl MealPlanItemType {
    /// Map the server's `type` string to a variant. Unrecognized values
    /// fall back to `Unknown`.
    pub fn from_type_str(s: &str) -> Self {
        match s {
            "recipe" => Self::Recipe,
            "product" => Self::Product,
            "note" => Self::Note,
            _ => Self::Unknown,
        }
    }
}

/// One entry of the meal plan (`objects/meal_plan`).
#[derive(Debug, Clone, Serialize)]
pub struct MealPlanItem {
    pub id: i64,
    pub day: NaiveDate,
    pub item_type: MealPlanItemType,
    pub recipe_id: Option<i64>,
    pub recipe_servings: Option<i64>,
    pub note: Option<String>,
    pub product_id: Option<i64>,
    pub product_amount: Option<f64>,
    pub product_qu_id: Option<i64>,
    pub row_created_timestamp: Option<NaiveDateTime>,
}

impl MealPlanItem {
    /// Create a MealPlanItem from a server JSON map.
    pub fn from_api_map(map: &Value) -> GrocyResult<Self> {
        let item_type = parse::string_field(map, "type")?
            .map(|s| MealPlanItemType::from_type_str(&s))
            .unwrap_or(MealPlanItemType::Unknown);

        Ok(Self {
            id: parse::require_int(map, "id")?,
            day: parse::date_field(map, "day")?.ok_or_else(|| {
                grocy_core::error::GrocyError::Parse("meal plan entry missing `day`".into())
            })?,
            item_type,
            recipe_id: parse::int_field(map, "recipe_id")?,
            recipe_servings: parse::int_field(map, "recipe_servings")?,
            note: parse::non_empty_string_field(map, "note")?,
            product_id: parse::int_field(map, "product_id")?,
            product_amount: parse::float_field(map, "product_amount")?,
            product_qu_id: parse::int_field(map, "product_qu_id")?,
            row_created_timestamp: parse::datetime_field(map, "row_created_timestamp")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_recipe_entry() {
        let map = json!({
            "id": "1",
            "day": "2020-08-10",
            "type": "recipe",
            "recipe_id": "1",
            "recipe_servings": "1",
            "note": null,
            "product_id": null,
            "product_amount": "0.0",
            "product_qu_id": null,
            "row_created_timestamp": "2020-08-12 19:59:30",
            "userfields": null
        });
        let item = MealPlanItem::from_api_map(&map).unwrap();
        assert_eq!(item.id, 1);
        assert_eq!(item.item_type, MealPlanItemType::Recipe);
        assert_eq!(item.recipe_id, Some(1));
        assert_eq!(item.recipe_servings, Some(1));
        assert!(item.note.is_none());
        assert!(item.product_id.is_none());
        assert_eq!(item.product_amount, Some(0.0));
        assert_eq!(item.day.to_string(), "2020-08-10");
    }

    #[test]
    fn test_unknown_type_falls_back() {
        assert_eq!(
            MealPlanItemType::from_type_str("something-new"),
            MealPlanItemType::Unknown
        );
    }

    #[test]
    fn test_entry_without_day_fails() {
        let map = json!({"id": "1", "type": "note"});
        assert!(MealPlanItem::from_api_map(&map).is_err());
    }
}
