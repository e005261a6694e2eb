//! Client configuration.
//!
//! Connection settings for a Grocy server: base URL, port, API key, timeout,
//! and TLS behaviour. Configuration can be persisted as TOML on disk and is
//! immutable for the lifetime of a client built from it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{GrocyError, GrocyResult};

/// Connection configuration for a Grocy server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrocyConfig {
    /// Server URL (scheme + host, optionally with an explicit port),
    /// e.g. "https://grocy.example.com".
    #[serde(default)]
    pub base_url: String,

    /// Port appended to the URL when the URL itself carries none.
    /// `None` leaves the URL untouched.
    #[serde(default = "default_port")]
    pub port: Option<u16>,

    /// API key sent as the GROCY-API-KEY header. The literal "demo_mode"
    /// selects demo mode, where no key header is sent.
    #[serde(default)]
    pub api_key: String,

    /// API request timeout in milliseconds.
    #[serde(default = "default_api_timeout")]
    pub api_timeout_ms: u64,

    /// Whether to accept self-signed SSL certificates from the server.
    #[serde(default)]
    pub accept_self_signed_certs: bool,
}

// Default value functions for serde

fn default_port() -> Option<u16> {
    Some(constants::DEFAULT_PORT)
}

fn default_api_timeout() -> u64 {
    constants::DEFAULT_API_TIMEOUT_MS
}

impl Default for GrocyConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            port: default_port(),
            api_key: String::new(),
            api_timeout_ms: default_api_timeout(),
            accept_self_signed_certs: false,
        }
    }
}

impl GrocyConfig {
    /// Create a configuration for the given server URL and API key,
    /// with all other fields at their defaults.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: Self::sanitize_base_url(&base_url.into()),
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Set an explicit port, or `None` to use the URL as-is.
    pub fn with_port(mut self, port: Option<u16>) -> Self {
        self.port = port;
        self
    }

    /// Whether this configuration selects demo mode (no API key header).
    pub fn is_demo_mode(&self) -> bool {
        self.api_key == constants::DEMO_MODE_KEY
    }

    /// Check whether the server connection is configured.
    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty() && !self.api_key.is_empty()
    }

    /// Sanitize and normalize a server URL.
    ///
    /// Ensures the URL has a scheme and strips trailing slashes.
    pub fn sanitize_base_url(url: &str) -> String {
        let trimmed = url.trim().trim_matches('"').trim();
        if trimmed.is_empty() {
            return String::new();
        }

        let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed.to_string()
        } else {
            format!("https://{trimmed}")
        };

        with_scheme.trim_end_matches('/').to_string()
    }

    /// Load configuration from the default config file path, falling back
    /// to defaults when no file exists yet.
    pub fn load_default() -> GrocyResult<Self> {
        let path = Self::default_config_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from_file(path: &Path) -> GrocyResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: GrocyConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to the default config file path.
    pub fn save_default(&self) -> GrocyResult<()> {
        let path = Self::default_config_path()?;
        self.save_to_file(&path)
    }

    /// Save configuration to a specific file path.
    pub fn save_to_file(&self, path: &Path) -> GrocyResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| GrocyError::Config(format!("failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> GrocyResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| GrocyError::Config("no user config directory".into()))?;
        Ok(config_dir.join("grocy-rs").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GrocyConfig::default();
        assert_eq!(config.port, Some(constants::DEFAULT_PORT));
        assert_eq!(config.api_timeout_ms, 30_000);
        assert!(!config.is_configured());
        assert!(!config.is_demo_mode());
    }

    #[test]
    fn test_demo_mode() {
        let config = GrocyConfig::new("https://demo.grocy.info", "demo_mode");
        assert!(config.is_demo_mode());
        assert!(config.is_configured());
    }

    #[test]
    fn test_sanitize_base_url() {
        assert_eq!(
            GrocyConfig::sanitize_base_url("grocy.example.com"),
            "https://grocy.example.com"
        );
        assert_eq!(
            GrocyConfig::sanitize_base_url("http://192.168.1.100:9192/"),
            "http://192.168.1.100:9192"
        );
        assert_eq!(
            GrocyConfig::sanitize_base_url("  \"https://example.com/\"  "),
            "https://example.com"
        );
        assert_eq!(GrocyConfig::sanitize_base_url(""), "");
    }

    #[test]
    fn test_toml_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = GrocyConfig::new("https://example.com", "apikey123").with_port(Some(8080));
        config.save_to_file(&path).unwrap();

        let loaded = GrocyConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.base_url, "https://example.com");
        assert_eq!(loaded.api_key, "apikey123");
        assert_eq!(loaded.port, Some(8080));
        assert_eq!(loaded.api_timeout_ms, config.api_timeout_ms);
    }

    #[test]
    fn test_defaults_fill_absent_fields() {
        let loaded: GrocyConfig = toml::from_str("base_url = \"https://example.com\"").unwrap();
        assert_eq!(loaded.port, Some(constants::DEFAULT_PORT));
        assert_eq!(loaded.api_timeout_ms, 30_000);
        assert!(!loaded.accept_self_signed_certs);
    }
}
