//! Product picture endpoints.
//!
//! Pictures live under the server's `files/` API; the file name is
//! base64-encoded into the URL path. Product pictures are stored under the
//! fixed name `{product_id}.jpg`.

use std::path::Path;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde_json::json;

use grocy_core::constants::{entity, file_group};
use grocy_core::error::{GrocyError, GrocyResult};

use crate::client::GrocyClient;

fn product_picture_name(product_id: i64) -> String {
    format!("{product_id}.jpg")
}

impl GrocyClient {
    /// Upload a local image file as the picture of a product.
    ///
    /// The path is checked before any network call; a missing file fails
    /// with `FileNotFound`.
    pub async fn upload_product_picture(
        &self,
        product_id: i64,
        picture_path: &Path,
    ) -> GrocyResult<()> {
        if !picture_path.exists() {
            return Err(GrocyError::FileNotFound(
                picture_path.display().to_string(),
            ));
        }

        let encoded_name = BASE64.encode(product_picture_name(product_id).as_bytes());
        let bytes = tokio::fs::read(picture_path).await?;
        self.put_bytes(
            &format!("files/{}/{}", file_group::PRODUCT_PICTURES, encoded_name),
            bytes,
        )
        .await?;
        Ok(())
    }

    /// Point a product record at its uploaded picture file.
    pub async fn update_product_picture(&self, product_id: i64) -> GrocyResult<()> {
        let body = json!({ "picture_file_name": product_picture_name(product_id) });
        self.put(
            &format!("objects/{}/{product_id}", entity::PRODUCTS),
            &body,
        )
        .await?;
        Ok(())
    }

    /// Upload a picture for a product and link it to the product record.
    pub async fn add_product_picture(
        &self,
        product_id: i64,
        picture_path: &Path,
    ) -> GrocyResult<()> {
        self.upload_product_picture(product_id, picture_path).await?;
        self.update_product_picture(product_id).await
    }
}
