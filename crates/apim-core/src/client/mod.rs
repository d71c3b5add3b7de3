//! Minimal JSON API client.
//!
//! `ApiClient` holds a base URL and issues one GET per `fetch` call against
//! the plain concatenation of base URL and endpoint. The response body is
//! parsed as JSON and returned as-is; failures propagate as [`FetchError`]
//! without retries or caching.

mod error;
mod request;

pub use error::FetchError;

use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

use crate::config::ApimConfig;

/// Per-request knobs: timeouts and optional custom headers.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    /// Connect timeout for the underlying transfer.
    pub connect_timeout: Duration,
    /// Total transfer timeout.
    pub request_timeout: Duration,
    /// Extra request headers, sent verbatim as `Name: value`.
    pub headers: HashMap<String, String>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            request_timeout: Duration::from_secs(60),
            headers: HashMap::new(),
        }
    }
}

impl RequestOptions {
    /// Options with timeouts taken from the loaded config.
    pub fn from_config(cfg: &ApimConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            request_timeout: Duration::from_secs(cfg.request_timeout_secs),
            headers: HashMap::new(),
        }
    }
}

/// JSON API client bound to one base URL.
///
/// The base URL is stored unchanged for the client's lifetime. No joining or
/// normalization happens on fetch: the request target is exactly
/// `base_url + endpoint`, so a client for `https://api.example.com` fetching
/// `/users` hits `https://api.example.com/users`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    options: RequestOptions,
}

impl ApiClient {
    /// Client with default request options.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_options(base_url, RequestOptions::default())
    }

    pub fn with_options(base_url: impl Into<String>, options: RequestOptions) -> Self {
        Self {
            base_url: base_url.into(),
            options,
        }
    }

    /// The base URL this client was constructed with, unchanged.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches `base_url + endpoint` with a single GET and parses the body
    /// as JSON.
    ///
    /// The blocking curl transfer runs on the tokio blocking pool; the call
    /// suspends once, awaiting the response. Transport errors, non-2xx
    /// statuses, and malformed bodies each surface as their own
    /// [`FetchError`] variant, carrying the underlying failure unchanged.
    pub async fn fetch(&self, endpoint: &str) -> Result<Value, FetchError> {
        let url = self.request_url(endpoint);
        let opts = self.options.clone();
        tracing::debug!("GET {}", url);

        let body = tokio::task::spawn_blocking(move || request::get(&url, &opts)).await??;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Synchronous form of [`fetch`](Self::fetch) for non-async callers.
    /// Runs in the current thread; call from `spawn_blocking` if used from
    /// async code.
    pub fn fetch_blocking(&self, endpoint: &str) -> Result<Value, FetchError> {
        let url = self.request_url(endpoint);
        tracing::debug!("GET {}", url);
        let body = request::get(&url, &self.options)?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Plain concatenation, by contract.
    fn request_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}
