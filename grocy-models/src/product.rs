//! Product and product-group entities.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

use grocy_core::constants::file_group;
use grocy_core::error::GrocyResult;

use crate::parse;

/// A product group (category).
#[derive(Debug, Clone, Serialize)]
pub struct Group {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl Group {
    /// Create a Group from a server JSON map.
    pub fn from_api_map(map: &Value) -> GrocyResult<Self> {
        Ok(Self {
            id: parse::require_int(map, "id")?,
            name: parse::require_string(map, "name")?,
            description: parse::non_empty_string_field(map, "description")?,
        })
    }
}

/// A product, as seen through any of the stock endpoints.
///
/// The server reports products in three shapes: the plain object record
/// (`objects/products`), a current-stock entry keyed by `product_id`, and a
/// missing-stock entry carrying precomputed shortage fields. One constructor
/// per shape; fields a shape does not carry stay `None`.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: i64,
    pub name: Option<String>,
    pub product_group_id: Option<i64>,
    /// Minimum stock amount configured for the product.
    pub min_stock_amount: Option<f64>,
    /// Amount currently in stock.
    pub available_amount: Option<f64>,
    pub best_before_date: Option<NaiveDate>,
    pub picture_file_name: Option<String>,
    /// How much is missing to reach the minimum stock amount.
    pub amount_missing: Option<f64>,
    /// Whether some stock exists but less than the minimum amount.
    pub is_partly_in_stock: Option<bool>,
}

impl Product {
    /// Create a Product from a plain object record (`objects/products`).
    pub fn from_record(map: &Value) -> GrocyResult<Self> {
        Ok(Self {
            id: parse::require_int(map, "id")?,
            name: parse::non_empty_string_field(map, "name")?,
            product_group_id: parse::int_field(map, "product_group_id")?,
            min_stock_amount: parse::float_field(map, "min_stock_amount")?,
            available_amount: None,
            best_before_date: None,
            picture_file_name: parse::non_empty_string_field(map, "picture_file_name")?,
            amount_missing: None,
            is_partly_in_stock: None,
        })
    }

    /// Create a Product from a current-stock entry (`stock`, or the
    /// due/overdue/expired lists of `stock/volatile`).
    ///
    /// Newer servers nest the full product record under `product`; its
    /// fields are folded in when present.
    pub fn from_stock_entry(map: &Value) -> GrocyResult<Self> {
        let amount = parse::float_field(map, "amount")?;

        let mut product = match map.get("product") {
            Some(record) if record.is_object() => Self::from_record(record)?,
            _ => Self {
                id: parse::require_int(map, "product_id")?,
                name: parse::non_empty_string_field(map, "product_name")?,
                product_group_id: None,
                min_stock_amount: None,
                available_amount: None,
                best_before_date: None,
                picture_file_name: None,
                amount_missing: None,
                is_partly_in_stock: None,
            },
        };

        product.available_amount = amount;
        product.best_before_date = parse::date_field(map, "best_before_date")?;
        if let (Some(needed), Some(stock)) = (product.min_stock_amount, amount) {
            product.amount_missing = Some((needed - stock).max(0.0));
            product.is_partly_in_stock = Some(stock > 0.0 && stock < needed);
        }
        Ok(product)
    }

    /// Create a Product from a missing-stock entry of `stock/volatile`,
    /// which carries the shortage fields precomputed by the server.
    pub fn from_missing_entry(map: &Value) -> GrocyResult<Self> {
        Ok(Self {
            id: parse::require_int(map, "id")?,
            name: parse::non_empty_string_field(map, "name")?,
            product_group_id: None,
            min_stock_amount: None,
            available_amount: None,
            best_before_date: None,
            picture_file_name: None,
            amount_missing: parse::float_field(map, "amount_missing")?,
            is_partly_in_stock: parse::bool_field(map, "is_partly_in_stock")?,
        })
    }

    /// Server path of the product picture scaled to `width`, when the
    /// product has one.
    pub fn picture_url_path(&self, width: u32) -> Option<String> {
        self.picture_file_name.as_ref().map(|name| {
            format!(
                "files/{}/{}?force_serve_as=picture&best_fit_width={width}",
                file_group::PRODUCT_PICTURES,
                BASE64.encode(name.as_bytes()),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_group_from_api_map() {
        let map = json!({
            "id": "1",
            "name": "Vegetables",
            "description": null,
            "row_created_timestamp": "2020-08-12 11:37:34"
        });
        let group = Group::from_api_map(&map).unwrap();
        assert_eq!(group.id, 1);
        assert_eq!(group.name, "Vegetables");
        assert!(group.description.is_none());
    }

    #[test]
    fn test_product_from_record() {
        let map = json!({
            "id": "20",
            "name": "Milk",
            "product_group_id": "3",
            "min_stock_amount": "8",
            "picture_file_name": "milk.jpg"
        });
        let product = Product::from_record(&map).unwrap();
        assert_eq!(product.id, 20);
        assert_eq!(product.name.as_deref(), Some("Milk"));
        assert_eq!(product.product_group_id, Some(3));
        assert_eq!(product.min_stock_amount, Some(8.0));
        assert!(product.available_amount.is_none());
    }

    #[test]
    fn test_product_from_stock_entry() {
        let map = json!({
            "product_id": "4",
            "amount": "2",
            "best_before_date": "2019-05-02"
        });
        let product = Product::from_stock_entry(&map).unwrap();
        assert_eq!(product.id, 4);
        assert_eq!(product.available_amount, Some(2.0));
        assert_eq!(
            product.best_before_date.unwrap().to_string(),
            "2019-05-02"
        );
    }

    #[test]
    fn test_stock_entry_with_nested_product_computes_shortage() {
        let map = json!({
            "product_id": "20",
            "amount": "3",
            "product": {
                "id": "20",
                "name": "Milk",
                "min_stock_amount": "8"
            }
        });
        let product = Product::from_stock_entry(&map).unwrap();
        assert_eq!(product.amount_missing, Some(5.0));
        assert_eq!(product.is_partly_in_stock, Some(true));
    }

    #[test]
    fn test_stock_above_minimum_is_not_missing() {
        let map = json!({
            "product_id": "20",
            "amount": "10",
            "product": {"id": "20", "min_stock_amount": "8"}
        });
        let product = Product::from_stock_entry(&map).unwrap();
        assert_eq!(product.amount_missing, Some(0.0));
        assert_eq!(product.is_partly_in_stock, Some(false));
    }

    #[test]
    fn test_product_from_missing_entry() {
        let map = json!({
            "id": "7",
            "name": "Bread",
            "amount_missing": "1",
            "is_partly_in_stock": "0"
        });
        let product = Product::from_missing_entry(&map).unwrap();
        assert_eq!(product.id, 7);
        assert_eq!(product.amount_missing, Some(1.0));
        assert_eq!(product.is_partly_in_stock, Some(false));
    }

    #[test]
    fn test_picture_url_path() {
        let mut product = Product::from_record(&json!({"id": "1"})).unwrap();
        assert!(product.picture_url_path(400).is_none());

        product.picture_file_name = Some("1.jpg".into());
        let path = product.picture_url_path(400).unwrap();
        assert_eq!(
            path,
            "files/productpictures/MS5qcGc=?force_serve_as=picture&best_fit_width=400"
        );
    }
}
