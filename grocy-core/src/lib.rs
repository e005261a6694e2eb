//! Grocy Core - Foundation types for the Grocy client crates.
//!
//! This crate provides the shared foundation used by the model and API crates:
//! - Client configuration (server URL, port, API key, TLS behaviour)
//! - Unified error type covering all failure categories
//! - Structured logging with tracing
//! - Common constants

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;

// Re-export commonly used items at the crate root
pub use config::GrocyConfig;
pub use error::{GrocyError, GrocyResult};
pub use logging::init_logging;
