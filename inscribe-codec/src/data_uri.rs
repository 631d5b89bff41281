//! Encode/decode between JSON metadata and `data:` URIs.
//!
//! The encoder produces `data:application/json;base64,<payload>` where the
//! payload is the standard base64 of the compact JSON serialization (key
//! order preserved - serde_json is built with `preserve_order`).
//!
//! The decoder is the inverse, plus the `;utf8,` literal variant, and it
//! deliberately merges "not an embedded payload" and "corrupt embedded
//! payload" into `None`: callers display absence, they do not branch on
//! the failure cause. The cause is still logged at debug level.
//!
//! # Examples
//!
//! ```
//! use inscribe_codec::data_uri::{encode_to_data_uri, data_uri_to_json};
//! use serde_json::json;
//!
//! let uri = encode_to_data_uri(&json!({"name": "hi"})).unwrap();
//! assert_eq!(uri, "data:application/json;base64,eyJuYW1lIjoiaGkifQ==");
//! assert_eq!(data_uri_to_json(&uri), Some(json!({"name": "hi"})));
//!
//! // Unrecognized prefixes are absence, not errors
//! assert_eq!(data_uri_to_json("ipfs://bafy123"), None);
//! ```

use crate::error::Result;
use crate::token_uri::{TokenUri, JSON_BASE64_PREFIX};
use crate::transcode::{Base64Codec, StandardCodec};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Prefix of an embedded base64 SVG image sub-payload.
pub const SVG_BASE64_PREFIX: &str = "data:image/svg+xml;base64,";

/// Encode any serializable value as a `data:application/json;base64,` URI.
///
/// Never fails for a JSON-serializable input; a `Serialize` impl that
/// errors (non-string map keys and the like) is a caller bug surfaced as
/// `CodecError::Json`.
pub fn encode_to_data_uri<T: Serialize>(value: &T) -> Result<String> {
    encode_to_data_uri_with(&StandardCodec, value)
}

/// Encode with an explicit base64 engine.
pub fn encode_to_data_uri_with<C: Base64Codec, T: Serialize>(
    codec: &C,
    value: &T,
) -> Result<String> {
    let json = serde_json::to_string(value)?;
    Ok(format!("{JSON_BASE64_PREFIX}{}", codec.encode(json.as_bytes())))
}

/// Decode a base64 payload (the part after the comma) to a JSON value.
///
/// This is the strict inner step: each failure (base64, UTF-8, JSON) comes
/// back as a distinct error. The CLI uses it to report terminating
/// messages; library callers go through [`data_uri_to_json`] instead.
pub fn decode_base64_json(payload: &str) -> Result<Value> {
    decode_base64_json_with(&StandardCodec, payload)
}

/// Decode a base64 JSON payload with an explicit base64 engine.
pub fn decode_base64_json_with<C: Base64Codec>(codec: &C, payload: &str) -> Result<Value> {
    let bytes = codec.decode(payload)?;
    let text = String::from_utf8(bytes)?;
    Ok(serde_json::from_str(&text)?)
}

/// Decode a tokenURI string to JSON metadata, if it embeds any.
///
/// Returns `None` both for unrecognized prefixes (remote URIs, image data
/// URIs, arbitrary text) and for recognized-prefix payloads that fail to
/// decode. Decode failures are logged; they never escape as errors.
pub fn data_uri_to_json(uri: &str) -> Option<Value> {
    data_uri_to_json_with(&StandardCodec, uri)
}

/// [`data_uri_to_json`] with an explicit base64 engine.
pub fn data_uri_to_json_with<C: Base64Codec>(codec: &C, uri: &str) -> Option<Value> {
    match TokenUri::parse(uri)? {
        TokenUri::DataJsonBase64 { payload } => match decode_base64_json_with(codec, payload) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!(error = %e, "failed to decode embedded base64 metadata");
                None
            }
        },
        TokenUri::DataJsonUtf8 { payload } => match serde_json::from_str(payload) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!(error = %e, "failed to parse embedded utf8 metadata");
                None
            }
        },
        TokenUri::Remote { .. } => None,
    }
}

/// Decode an SVG image sub-payload from a metadata `image` field.
///
/// Returns `Ok(None)` when the field is not a `data:image/svg+xml;base64,`
/// URI (remote image URLs, other image MIME types); `Err` only when the
/// prefix matched but the payload would not decode.
pub fn svg_from_data_uri(image: &str) -> Result<Option<String>> {
    svg_from_data_uri_with(&StandardCodec, image)
}

/// [`svg_from_data_uri`] with an explicit base64 engine.
pub fn svg_from_data_uri_with<C: Base64Codec>(codec: &C, image: &str) -> Result<Option<String>> {
    let Some(payload) = image.strip_prefix(SVG_BASE64_PREFIX) else {
        return Ok(None);
    };
    let bytes = codec.decode(payload.trim())?;
    Ok(Some(String::from_utf8(bytes)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_encode_fixed_vector() {
        let uri = encode_to_data_uri(&json!({"name": "hi"})).unwrap();
        assert_eq!(uri, "data:application/json;base64,eyJuYW1lIjoiaGkifQ==");
    }

    #[test]
    fn test_decode_base64_variant() {
        let value = data_uri_to_json("data:application/json;base64,eyJhIjoxfQ==");
        assert_eq!(value, Some(json!({"a": 1})));
    }

    #[test]
    fn test_decode_utf8_variant() {
        let value = data_uri_to_json(r#"data:application/json;utf8,{"a":1}"#);
        assert_eq!(value, Some(json!({"a": 1})));
    }

    #[test]
    fn test_decode_utf8_variant_with_commas() {
        let value = data_uri_to_json(r#"data:application/json;utf8,{"a":1,"b":[1,2]}"#);
        assert_eq!(value, Some(json!({"a": 1, "b": [1, 2]})));
    }

    #[test]
    fn test_unrecognized_prefix_is_absence() {
        assert_eq!(data_uri_to_json("ipfs://QmAbc"), None);
        assert_eq!(data_uri_to_json("https://example.com/meta.json"), None);
        assert_eq!(data_uri_to_json("not a uri at all"), None);
        assert_eq!(data_uri_to_json(""), None);
    }

    #[test]
    fn test_bad_base64_is_absence_not_error() {
        assert_eq!(
            data_uri_to_json("data:application/json;base64,!!!not-base64!!!"),
            None
        );
    }

    #[test]
    fn test_bad_utf8_is_absence() {
        // 0xFF 0xFE is never valid UTF-8; "//4=" is its base64.
        assert_eq!(data_uri_to_json("data:application/json;base64,//4="), None);
    }

    #[test]
    fn test_bad_json_is_absence() {
        // "bm90IGpzb24=" decodes to "not json"
        assert_eq!(
            data_uri_to_json("data:application/json;base64,bm90IGpzb24="),
            None
        );
        assert_eq!(data_uri_to_json("data:application/json;utf8,{broken"), None);
    }

    #[test]
    fn test_roundtrip_structural_equality() {
        let original = json!({
            "name": "inscription #7",
            "description": "unicode: héllo ☂",
            "image": "ipfs://bafyimage",
            "attributes": [{"trait_type": "hue", "value": 42}],
            "zeta": "extra keys survive",
            "alpha": null
        });
        let uri = encode_to_data_uri(&original).unwrap();
        assert_eq!(data_uri_to_json(&uri), Some(original));
    }

    #[test]
    fn test_encode_preserves_key_order() {
        let value = json!({"zebra": 1, "apple": 2});
        let uri = encode_to_data_uri(&value).unwrap();
        let json = decode_base64_json(uri.strip_prefix(JSON_BASE64_PREFIX).unwrap()).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["zebra", "apple"]);
    }

    #[test]
    fn test_svg_subpayload_roundtrip() {
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg"><rect fill="#000"/></svg>"##;
        let uri = format!("{SVG_BASE64_PREFIX}{}", StandardCodec.encode(svg.as_bytes()));
        assert_eq!(svg_from_data_uri(&uri).unwrap(), Some(svg.to_string()));
    }

    #[test]
    fn test_svg_unrecognized_prefix_not_handled() {
        assert_eq!(svg_from_data_uri("https://example.com/a.svg").unwrap(), None);
        assert_eq!(svg_from_data_uri("data:image/png;base64,AAAA").unwrap(), None);
    }

    #[test]
    fn test_svg_bad_payload_is_error() {
        assert!(svg_from_data_uri("data:image/svg+xml;base64,!!!").is_err());
    }
}
