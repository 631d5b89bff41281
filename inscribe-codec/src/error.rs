//! Error types for inscribe-codec

use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, CodecError>;

/// Codec error type
#[derive(Error, Debug)]
pub enum CodecError {
    /// Malformed base64 payload
    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Decoded bytes are not valid UTF-8
    #[error("UTF-8 decode error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// JSON serialization or parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
