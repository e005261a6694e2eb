//! Shopping list entries.

use serde::Serialize;
use serde_json::Value;

use grocy_core::error::GrocyResult;

use crate::parse;
use crate::product::Product;

/// One entry on a shopping list.
#[derive(Debug, Clone, Serialize)]
pub struct ShoppingListProduct {
    pub id: i64,
    pub product_id: Option<i64>,
    pub amount: f64,
    /// Free-text note. A `null` in the response stays absent here.
    pub note: Option<String>,
    /// The referenced product record, when resolved by the caller.
    pub product: Option<Product>,
}

impl ShoppingListProduct {
    /// Create a ShoppingListProduct from a server JSON map.
    pub fn from_api_map(map: &Value) -> GrocyResult<Self> {
        Ok(Self {
            id: parse::require_int(map, "id")?,
            product_id: parse::int_field(map, "product_id")?,
            amount: parse::require_float(map, "amount")?,
            note: parse::non_empty_string_field(map, "note")?,
            product: None,
        })
    }
}
