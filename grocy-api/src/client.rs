//! HTTP client for the Grocy server REST API.
//!
//! Handles API-key and demo-mode authentication, URL construction from the
//! configured base URL and port, SSL certificate handling, and the
//! request/response lifecycle. Calls are independent of each other; the only
//! state is the immutable connection configuration.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response};
use serde_json::Value;
use tracing::debug;

use grocy_core::config::GrocyConfig;
use grocy_core::constants;
use grocy_core::error::{GrocyError, GrocyResult};

/// HTTP client for communicating with a Grocy server.
///
/// Wraps `reqwest::Client` with Grocy-specific authentication and error
/// handling. Cloning is cheap and clones share the connection pool.
#[derive(Clone)]
pub struct GrocyClient {
    inner: Client,
    /// Base URL of the REST API (e.g. "https://grocy.example.com:9192/api").
    api_root: String,
    /// API key attached to every request; `None` in demo mode.
    api_key: Option<String>,
}

impl GrocyClient {
    /// Create a new GrocyClient from connection configuration.
    pub fn new(config: &GrocyConfig) -> GrocyResult<Self> {
        let mut builder = Client::builder()
            .timeout(Duration::from_millis(config.api_timeout_ms))
            .connect_timeout(Duration::from_secs(15));

        // Handle self-signed certificates
        if config.accept_self_signed_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let inner = builder
            .build()
            .map_err(|e| GrocyError::Http(format!("failed to build HTTP client: {e}")))?;

        let base = GrocyConfig::sanitize_base_url(&config.base_url);
        let api_root = derive_api_root(&base, config.port);
        let api_key = if config.is_demo_mode() {
            None
        } else {
            Some(config.api_key.clone())
        };

        Ok(Self {
            inner,
            api_root,
            api_key,
        })
    }

    /// Get the API root URL.
    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// Build the full URL for an API path.
    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_root, path)
    }

    /// Apply the accept header and, outside demo mode, the API key.
    fn apply_headers(&self, mut builder: RequestBuilder) -> RequestBuilder {
        builder = builder.header(reqwest::header::ACCEPT, "application/json");
        if let Some(ref key) = self.api_key {
            builder = builder.header(constants::API_KEY_HEADER, key.as_str());
        }
        builder
    }

    /// Internal: build and send a request with an optional JSON body.
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> GrocyResult<Response> {
        let url = self.url(path);
        debug!("{} {}", method, path);

        let mut builder = self.inner.request(method, &url);
        if let Some(b) = body {
            builder = builder.json(b);
        }
        let response = self
            .apply_headers(builder)
            .send()
            .await
            .map_err(classify_error)?;

        check_status(response).await
    }

    // --- Transport methods ---

    /// Execute a GET request.
    pub async fn get(&self, path: &str) -> GrocyResult<Response> {
        self.request(Method::GET, path, None).await
    }

    /// Execute a POST request with an optional JSON body.
    pub async fn post(&self, path: &str, body: Option<&Value>) -> GrocyResult<Response> {
        self.request(Method::POST, path, body).await
    }

    /// Execute a PUT request with a JSON body.
    pub async fn put(&self, path: &str, body: &Value) -> GrocyResult<Response> {
        self.request(Method::PUT, path, Some(body)).await
    }

    /// Execute a PUT request with a raw octet-stream body (file uploads).
    pub async fn put_bytes(&self, path: &str, bytes: Vec<u8>) -> GrocyResult<Response> {
        let url = self.url(path);
        debug!("PUT (octet-stream) {}", path);

        let builder = self
            .inner
            .put(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(bytes);
        let response = self
            .apply_headers(builder)
            .send()
            .await
            .map_err(classify_error)?;

        check_status(response).await
    }

    // --- Response helpers ---

    /// Read a response body as JSON. An empty or absent body yields `None`;
    /// this is how 204-style endpoints report "no data".
    pub async fn response_json(response: Response) -> GrocyResult<Option<Value>> {
        let text = response
            .text()
            .await
            .map_err(|e| GrocyError::Http(format!("failed to read response body: {e}")))?;
        if text.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&text)
            .map(Some)
            .map_err(|e| GrocyError::Serialization(format!("failed to parse response: {e}")))
    }

    /// Convenience: GET + parse body, tolerating empty responses.
    pub async fn get_json(&self, path: &str) -> GrocyResult<Option<Value>> {
        let resp = self.get(path).await?;
        Self::response_json(resp).await
    }
}

/// Check the HTTP status code and convert non-2xx responses into errors.
async fn check_status(response: Response) -> GrocyResult<Response> {
    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        let body = response.text().await.unwrap_or_default();
        return Err(GrocyError::Api {
            status: status.as_u16(),
            message: body,
        });
    }
    Ok(response)
}

/// Classify a reqwest error into a GrocyError variant.
fn classify_error(e: reqwest::Error) -> GrocyError {
    if e.is_timeout() {
        GrocyError::Timeout(e.to_string())
    } else if e.is_connect() {
        GrocyError::Http(format!("connection failed: {e}"))
    } else {
        GrocyError::Http(e.to_string())
    }
}

/// Derive the API root from a base URL and an optional configured port.
/// An explicit port in the URL wins; with neither, no port is appended.
fn derive_api_root(base_url: &str, port: Option<u16>) -> String {
    if let Ok(url) = reqwest::Url::parse(base_url) {
        let scheme = url.scheme();
        let host = url.host_str().unwrap_or("localhost");
        match url.port().or(port) {
            Some(p) => format!("{scheme}://{host}:{p}/{}", constants::API_PREFIX),
            None => format!("{scheme}://{host}/{}", constants::API_PREFIX),
        }
    } else {
        format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            constants::API_PREFIX
        )
    }
}
