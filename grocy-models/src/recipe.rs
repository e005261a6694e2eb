//! Recipe entities.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::Serialize;
use serde_json::Value;

use grocy_core::constants::file_group;
use grocy_core::error::GrocyResult;

use crate::parse;

/// A recipe record (`objects/recipes/{id}`).
#[derive(Debug, Clone, Serialize)]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    /// HTML description as stored by the server.
    pub description: Option<String>,
    pub base_servings: Option<i64>,
    pub desired_servings: Option<i64>,
    pub picture_file_name: Option<String>,
    /// Set when the recipe produces a product.
    pub product_id: Option<i64>,
}

impl Recipe {
    /// Create a Recipe from a server JSON map.
    pub fn from_api_map(map: &Value) -> GrocyResult<Self> {
        Ok(Self {
            id: parse::require_int(map, "id")?,
            name: parse::require_string(map, "name")?,
            description: parse::non_empty_string_field(map, "description")?,
            base_servings: parse::int_field(map, "base_servings")?,
            desired_servings: parse::int_field(map, "desired_servings")?,
            picture_file_name: parse::non_empty_string_field(map, "picture_file_name")?,
            product_id: parse::int_field(map, "product_id")?,
        })
    }

    /// Server path of the recipe picture scaled to `width`, when the
    /// recipe has one.
    pub fn picture_url_path(&self, width: u32) -> Option<String> {
        self.picture_file_name.as_ref().map(|name| {
            format!(
                "files/{}/{}?force_serve_as=picture&best_fit_width={width}",
                file_group::RECIPE_PICTURES,
                BASE64.encode(name.as_bytes()),
            )
        })
    }
}
