//! Stock views: per-product details and the volatile stock report.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use serde_json::Value;

use grocy_core::error::{GrocyError, GrocyResult};

use crate::parse;
use crate::product::Product;

/// Detailed stock state of one product (`stock/products/{id}`).
#[derive(Debug, Clone, Serialize)]
pub struct ProductDetails {
    pub product: Product,
    pub stock_amount: Option<f64>,
    pub stock_amount_opened: Option<f64>,
    pub last_purchased: Option<NaiveDate>,
    pub last_used: Option<NaiveDateTime>,
    pub last_price: Option<f64>,
    pub next_best_before_date: Option<NaiveDateTime>,
}

impl ProductDetails {
    /// Create ProductDetails from a server JSON map.
    pub fn from_api_map(map: &Value) -> GrocyResult<Self> {
        let record = map
            .get("product")
            .filter(|v| v.is_object())
            .ok_or_else(|| GrocyError::Parse("product details missing `product`".into()))?;
        let mut product = Product::from_record(record)?;

        let stock_amount = parse::float_field(map, "stock_amount")?;
        product.available_amount = stock_amount;
        if let (Some(needed), Some(stock)) = (product.min_stock_amount, stock_amount) {
            product.amount_missing = Some((needed - stock).max(0.0));
            product.is_partly_in_stock = Some(stock > 0.0 && stock < needed);
        }

        Ok(Self {
            product,
            stock_amount,
            stock_amount_opened: parse::float_field(map, "stock_amount_opened")?,
            last_purchased: parse::date_field(map, "last_purchased")?,
            last_used: parse::datetime_field(map, "last_used")?,
            last_price: parse::float_field(map, "last_price")?,
            next_best_before_date: parse::datetime_field(map, "next_best_before_date")?,
        })
    }
}

/// The volatile stock report (`stock/volatile`): products that are due
/// soon, overdue, expired, or below their minimum stock amount.
///
/// Absent keys parse as empty lists; older servers do not send all four.
#[derive(Debug, Clone, Default, Serialize)]
pub struct VolatileStock {
    pub due_products: Vec<Product>,
    pub overdue_products: Vec<Product>,
    pub expired_products: Vec<Product>,
    pub missing_products: Vec<Product>,
}

impl VolatileStock {
    /// Create a VolatileStock from a server JSON map.
    pub fn from_api_map(map: &Value) -> GrocyResult<Self> {
        Ok(Self {
            due_products: stock_list(map, "due_products")?,
            overdue_products: stock_list(map, "overdue_products")?,
            expired_products: stock_list(map, "expired_products")?,
            missing_products: missing_list(map, "missing_products")?,
        })
    }
}

fn stock_list(map: &Value, key: &str) -> GrocyResult<Vec<Product>> {
    match map.get(key).and_then(|v| v.as_array()) {
        Some(entries) => entries.iter().map(Product::from_stock_entry).collect(),
        None => Ok(vec![]),
    }
}

fn missing_list(map: &Value, key: &str) -> GrocyResult<Vec<Product>> {
    match map.get(key).and_then(|v| v.as_array()) {
        Some(entries) => entries.iter().map(Product::from_missing_entry).collect(),
        None => Ok(vec![]),
    }
}
