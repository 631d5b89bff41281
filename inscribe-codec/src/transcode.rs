//! Base64 transcoding seam.
//!
//! The codec's only binary/text transcoding is standard-alphabet base64
//! (padded, not URL-safe - tokenURIs embed standard base64). The engine is
//! behind a small trait so the core codec never reaches for a concrete
//! base64 implementation directly.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Bytes <-> base64 text. Both operations are total over their well-formed
/// domains; only `decode` can fail, and only on malformed base64.
pub trait Base64Codec {
    /// Encode raw bytes to standard base64 text (with padding).
    fn encode(&self, bytes: &[u8]) -> String;

    /// Decode standard base64 text to raw bytes.
    fn decode(&self, text: &str) -> Result<Vec<u8>, base64::DecodeError>;
}

/// Standard-alphabet base64 engine (the `base64` crate's `STANDARD`).
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardCodec;

impl Base64Codec for StandardCodec {
    fn encode(&self, bytes: &[u8]) -> String {
        STANDARD.encode(bytes)
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(text)
    }
}
