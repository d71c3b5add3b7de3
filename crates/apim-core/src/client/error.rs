//! Fetch error type.
//!
//! One variant per failure source so callers can tell transport, HTTP status,
//! and body-parse failures apart. The underlying error is kept as `source()`
//! untranslated.

use thiserror::Error;

/// Error from a single fetch: transport failure, non-2xx status, bad body,
/// or a lost blocking task.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (connect failure, timeout, DNS, etc.).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("GET {url} returned HTTP {code}")]
    Http { url: String, code: u32 },
    /// Response body was not valid JSON.
    #[error("response body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The blocking request task was cancelled or panicked.
    #[error("request task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl FetchError {
    /// Status code for `Http` errors, `None` otherwise.
    pub fn status(&self) -> Option<u32> {
        match self {
            FetchError::Http { code, .. } => Some(*code),
            _ => None,
        }
    }
}
