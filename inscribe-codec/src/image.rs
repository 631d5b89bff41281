//! Image payload embedding.
//!
//! The mint helper can embed an image file directly in the tokenURI as a
//! `data:image/<mime>;base64,` sub-URI. File reading stays with the
//! caller; this module only maps extensions to MIME types and assembles
//! the data URI from raw bytes.

use crate::transcode::{Base64Codec, StandardCodec};
use std::path::Path;

/// MIME type for a known image file extension.
///
/// Matching is on the lowercased extension. Returns `None` for anything we
/// do not recognize as an image; callers treat that as "cannot embed".
pub fn mime_for_extension(ext: &str) -> Option<&'static str> {
    match ext.to_lowercase().as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        "avif" => Some("image/avif"),
        "bmp" => Some("image/bmp"),
        "ico" => Some("image/x-icon"),
        _ => None,
    }
}

/// MIME type for an image file path, from its extension.
pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    path.extension()
        .and_then(|e| e.to_str())
        .and_then(mime_for_extension)
}

/// Assemble a `data:<mime>;base64,` URI from raw image bytes.
pub fn encode_image_to_data_uri(mime: &str, bytes: &[u8]) -> String {
    encode_image_to_data_uri_with(&StandardCodec, mime, bytes)
}

/// [`encode_image_to_data_uri`] with an explicit base64 engine.
pub fn encode_image_to_data_uri_with<C: Base64Codec>(
    codec: &C,
    mime: &str,
    bytes: &[u8],
) -> String {
    format!("data:{mime};base64,{}", codec.encode(bytes))
}
