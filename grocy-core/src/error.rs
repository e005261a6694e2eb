//! Error types for the Grocy client.
//!
//! All failure categories are unified into a single `GrocyError` enum with
//! conversions from underlying library errors. There is no retry or recovery
//! machinery; every failure propagates to the caller.

use thiserror::Error;

/// Convenience type alias for Results using GrocyError.
pub type GrocyResult<T> = Result<T, GrocyError>;

/// Unified error type covering all failure categories in the client.
#[derive(Error, Debug)]
pub enum GrocyError {
    /// Failed to load or parse client configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP transport failure (connection, DNS, TLS).
    #[error("http error: {0}")]
    Http(String),

    /// HTTP request timed out.
    #[error("request timeout: {0}")]
    Timeout(String),

    /// Server answered with a non-2xx status code.
    #[error("api error (status {status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, if the server sent one.
        message: String,
    },

    /// A local file is missing. Raised before any network call when a
    /// picture upload path does not exist.
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// A response field was absent or could not be coerced to its type.
    #[error("parse error: {0}")]
    Parse(String),

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// File system operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapping anyhow errors for interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GrocyError {
    /// The HTTP status code, when this error came from a server response.
    pub fn status(&self) -> Option<u16> {
        match self {
            GrocyError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for GrocyError {
    fn from(e: serde_json::Error) -> Self {
        GrocyError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for GrocyError {
    fn from(e: toml::de::Error) -> Self {
        GrocyError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = GrocyError::Api {
            status: 400,
            message: "bad request".into(),
        };
        assert_eq!(err.to_string(), "api error (status 400): bad request");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_status_absent_for_transport_errors() {
        let err = GrocyError::Http("connection refused".into());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: GrocyError = json_err.into();
        assert!(matches!(err, GrocyError::Serialization(_)));
    }
}
