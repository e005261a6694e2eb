//! Grocy API - HTTP client for the Grocy server REST API.
//!
//! This crate provides a typed client covering the shopping list, stock,
//! chore, task, recipe, meal plan, userfield, and picture endpoints of a
//! self-hosted Grocy server. It attaches the API key (or demo-mode
//! credential), decodes JSON bodies into the `grocy-models` entities, and
//! surfaces every non-2xx response as an error carrying the status code.

pub mod client;
pub mod endpoints;

// Re-export key types
pub use client::GrocyClient;
pub use endpoints::shopping_list::AddToShoppingListParams;
pub use endpoints::stock::TransactionType;
