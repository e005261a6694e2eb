//! System endpoints.

use chrono::NaiveDateTime;

use grocy_core::error::GrocyResult;
use grocy_models::parse;

use crate::client::GrocyClient;

impl GrocyClient {
    /// Fetch the time the server database last changed. Yields `None`
    /// when the server does not report one.
    pub async fn last_db_changed(&self) -> GrocyResult<Option<NaiveDateTime>> {
        let body = self.get_json("system/db-changed-time").await?;
        match body {
            Some(map) => parse::datetime_field(&map, "changed_time"),
            None => Ok(None),
        }
    }
}
