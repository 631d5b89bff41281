//! Error types for the resolver's fetch path.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ResolveError>;

/// Errors from the single fallback fetch. These never escape
/// [`Resolver::resolve`](crate::Resolver::resolve) - they are logged and
/// merged into absence - but the fetch step itself keeps them distinct.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Network-level failure (connect, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response status.
    #[error("metadata fetch failed with status {status} for {url}")]
    Status { status: u16, url: String },

    /// Response body was not valid JSON.
    #[error("invalid metadata body: {0}")]
    Json(#[from] serde_json::Error),
}
