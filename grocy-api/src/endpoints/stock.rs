//! Stock endpoints.

use chrono::NaiveDate;
use serde_json::{json, Map, Value};

use grocy_core::error::GrocyResult;
use grocy_models::parse::DATE_FORMAT;
use grocy_models::{Product, ProductDetails, VolatileStock};

use crate::client::GrocyClient;

/// Stock booking transaction types accepted by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    Purchase,
    Consume,
    InventoryCorrection,
    ProductOpened,
}

impl TransactionType {
    /// The wire representation of this transaction type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Purchase => "purchase",
            Self::Consume => "consume",
            Self::InventoryCorrection => "inventory-correction",
            Self::ProductOpened => "product-opened",
        }
    }
}

impl GrocyClient {
    /// Fetch all products currently in stock.
    pub async fn stock(&self) -> GrocyResult<Vec<Product>> {
        let body = self.get_json("stock").await?;
        match body.as_ref().and_then(|v| v.as_array()) {
            Some(entries) => entries.iter().map(Product::from_stock_entry).collect(),
            None => Ok(vec![]),
        }
    }

    /// Fetch the detailed stock state of one product.
    pub async fn product(&self, product_id: i64) -> GrocyResult<Option<ProductDetails>> {
        let body = self
            .get_json(&format!("stock/products/{product_id}"))
            .await?;
        match body {
            Some(map) => Ok(Some(ProductDetails::from_api_map(&map)?)),
            None => Ok(None),
        }
    }

    /// Fetch the volatile stock report (due, overdue, expired, missing).
    pub async fn volatile_stock(&self) -> GrocyResult<VolatileStock> {
        let body = self.get_json("stock/volatile").await?;
        match body {
            Some(map) => VolatileStock::from_api_map(&map),
            None => Ok(VolatileStock::default()),
        }
    }

    /// Products that are due soon.
    pub async fn due_products(&self) -> GrocyResult<Vec<Product>> {
        Ok(self.volatile_stock().await?.due_products)
    }

    /// Products past their due date.
    pub async fn overdue_products(&self) -> GrocyResult<Vec<Product>> {
        Ok(self.volatile_stock().await?.overdue_products)
    }

    /// Products past their expiration date.
    pub async fn expired_products(&self) -> GrocyResult<Vec<Product>> {
        Ok(self.volatile_stock().await?.expired_products)
    }

    /// Products below their minimum stock amount.
    pub async fn missing_products(&self) -> GrocyResult<Vec<Product>> {
        Ok(self.volatile_stock().await?.missing_products)
    }

    /// Book an amount of a product into stock.
    pub async fn add_product(
        &self,
        product_id: i64,
        amount: f64,
        price: Option<f64>,
        best_before_date: Option<NaiveDate>,
    ) -> GrocyResult<()> {
        let mut body = Map::new();
        body.insert("amount".into(), json!(amount));
        body.insert(
            "transaction_type".into(),
            json!(TransactionType::Purchase.as_str()),
        );
        if let Some(price) = price {
            body.insert("price".into(), json!(price));
        }
        if let Some(date) = best_before_date {
            body.insert(
                "best_before_date".into(),
                json!(date.format(DATE_FORMAT).to_string()),
            );
        }
        self.post(
            &format!("stock/products/{product_id}/add"),
            Some(&Value::Object(body)),
        )
        .await?;
        Ok(())
    }

    /// Book an amount of a product out of stock.
    pub async fn consume_product(
        &self,
        product_id: i64,
        amount: f64,
        spoiled: bool,
    ) -> GrocyResult<()> {
        let body = json!({
            "amount": amount,
            "transaction_type": TransactionType::Consume.as_str(),
            "spoiled": spoiled,
        });
        self.post(&format!("stock/products/{product_id}/consume"), Some(&body))
            .await?;
        Ok(())
    }
}
