//! Client-wide constants.

/// Conventional port of a self-hosted Grocy instance.
pub const DEFAULT_PORT: u16 = 9192;

/// Path prefix of the REST API on the server.
pub const API_PREFIX: &str = "api";

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "GROCY-API-KEY";

/// API key value selecting demo mode: no key header is sent, matching the
/// public demo server which accepts unauthenticated requests.
pub const DEMO_MODE_KEY: &str = "demo_mode";

/// Default API request timeout in milliseconds.
pub const DEFAULT_API_TIMEOUT_MS: u64 = 30_000;

/// Default width for server-side picture scaling.
pub const DEFAULT_PICTURE_WIDTH: u32 = 400;

/// File groups under the server's `files/` endpoint. The file name segment
/// is base64-encoded into the URL path.
pub mod file_group {
    /// Product pictures.
    pub const PRODUCT_PICTURES: &str = "productpictures";
    /// Recipe pictures.
    pub const RECIPE_PICTURES: &str = "recipepictures";
}

/// Entity names accepted by the generic `objects/` and `userfields/` endpoints.
pub mod entity {
    pub const PRODUCTS: &str = "products";
    pub const PRODUCT_GROUPS: &str = "product_groups";
    pub const SHOPPING_LIST: &str = "shopping_list";
    pub const RECIPES: &str = "recipes";
    pub const MEAL_PLAN: &str = "meal_plan";
    pub const CHORES: &str = "chores";
    pub const TASKS: &str = "tasks";
}
