//! Shopping list endpoints.

use serde::Serialize;
use serde_json::json;

use grocy_core::error::GrocyResult;
use grocy_models::{Product, ShoppingListProduct};

use crate::client::GrocyClient;

/// Parameters for adding a product to a shopping list.
#[derive(Debug, Clone, Serialize)]
pub struct AddToShoppingListParams {
    pub product_id: i64,
    /// Target shopping list; the server uses the default list when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_amount: Option<f64>,
}

impl AddToShoppingListParams {
    pub fn new(product_id: i64) -> Self {
        Self {
            product_id,
            list_id: None,
            product_amount: None,
        }
    }
}

impl GrocyClient {
    /// Fetch the shopping list. An empty response parses to an empty list.
    pub async fn shopping_list(&self) -> GrocyResult<Vec<ShoppingListProduct>> {
        let body = self.get_json("objects/shopping_list").await?;
        match body.as_ref().and_then(|v| v.as_array()) {
            Some(entries) => entries
                .iter()
                .map(ShoppingListProduct::from_api_map)
                .collect(),
            None => Ok(vec![]),
        }
    }

    /// Fetch the shopping list and resolve each entry's product record.
    pub async fn shopping_list_with_products(&self) -> GrocyResult<Vec<ShoppingListProduct>> {
        let mut entries = self.shopping_list().await?;
        for entry in &mut entries {
            if let Some(product_id) = entry.product_id {
                let map = self
                    .get_json(&format!("objects/products/{product_id}"))
                    .await?;
                entry.product = match map {
                    Some(m) => Some(Product::from_record(&m)?),
                    None => None,
                };
            }
        }
        Ok(entries)
    }

    /// Add all products below their minimum stock amount to the shopping list.
    pub async fn add_missing_products_to_shopping_list(&self) -> GrocyResult<()> {
        self.post("stock/shoppinglist/add-missing-products", None)
            .await?;
        Ok(())
    }

    /// Add a product to the shopping list.
    pub async fn add_product_to_shopping_list(
        &self,
        params: &AddToShoppingListParams,
    ) -> GrocyResult<()> {
        let body = serde_json::to_value(params)?;
        self.post("stock/shoppinglist/add-product", Some(&body))
            .await?;
        Ok(())
    }

    /// Remove a product from the shopping list.
    pub async fn remove_product_from_shopping_list(&self, product_id: i64) -> GrocyResult<()> {
        let body = json!({ "product_id": product_id });
        self.post("stock/shoppinglist/remove-product", Some(&body))
            .await?;
        Ok(())
    }

    /// Remove all entries from the shopping list.
    pub async fn clear_shopping_list(&self) -> GrocyResult<()> {
        self.post("stock/shoppinglist/clear", None).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_skip_absent_fields() {
        let params = AddToShoppingListParams::new(19);
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["product_id"], 19);
        assert!(json.get("list_id").is_none());
        assert!(json.get("product_amount").is_none());
    }

    #[test]
    fn test_params_serialize_full() {
        let params = AddToShoppingListParams {
            product_id: 19,
            list_id: Some(2),
            product_amount: Some(1.5),
        };
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["list_id"], 2);
        assert_eq!(json["product_amount"], 1.5);
    }
}
