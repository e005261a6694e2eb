//! Grocy Models - Entity records parsed from server JSON.
//!
//! The server serializes most scalar fields as strings ("1", "0.0",
//! "2020-08-10"); every entity here is built from a raw `serde_json::Value`
//! map through a `from_api_map` constructor that coerces those into native
//! types. Entities are immutable snapshots of one API response; there is no
//! update-in-place.

pub mod chore;
pub mod meal_plan;
pub mod parse;
pub mod product;
pub mod recipe;
pub mod shopping_list;
pub mod stock;
pub mod task;

// Re-export key types
pub use chore::Chore;
pub use meal_plan::{MealPlanItem, MealPlanItemType};
pub use product::{Group, Product};
pub use recipe::Recipe;
pub use shopping_list::ShoppingListProduct;
pub use stock::{ProductDetails, VolatileStock};
pub use task::Task;

/// Open key/value mapping of user-defined fields attached to an entity.
pub type Userfields = std::collections::HashMap<String, serde_json::Value>;
