//! Decode and pretty-print an embedded tokenURI.
//!
//! One tokenURI in, pretty metadata JSON out, then the SVG image
//! sub-payload when present. Malformed input terminates with a fixed
//! stderr message and exit code 1.

use crate::error::{CliError, CliResult};
use crate::input::{self, InputSource};
use crate::output;
use inscribe_codec::{decode_base64_json, svg_from_data_uri, CodecError, TokenUri};
use serde_json::Value;
use std::path::Path;

pub fn run(uri: Option<&str>, file: Option<&Path>) -> CliResult<()> {
    let source = input::resolve_input(uri, file);
    let uri = input::read_token_uri(&source)?;

    let metadata = decode_token_uri(&uri)?;
    println!("Metadata JSON:");
    println!("{}", output::pretty_json(&metadata));

    print_image(&metadata)
}

/// Decode the tokenURI to JSON, with terminating messages per failure.
///
/// Recognized `data:application/json` variants go through the codec. For
/// anything else the fallback applies: everything after the first comma
/// is treated as base64 JSON, and a missing comma is a format error.
fn decode_token_uri(uri: &str) -> CliResult<Value> {
    match TokenUri::parse(uri) {
        Some(TokenUri::DataJsonBase64 { payload }) => {
            decode_base64_json(payload.trim()).map_err(json_decode_error)
        }
        Some(TokenUri::DataJsonUtf8 { payload }) => serde_json::from_str(payload)
            .map_err(|e| CliError::Plain(format!("Decoded payload is not valid JSON.\n{e}"))),
        _ => {
            let comma = uri.find(',').ok_or_else(|| {
                CliError::Plain("Invalid tokenURI format. Missing comma separator.".to_string())
            })?;
            decode_base64_json(uri[comma + 1..].trim()).map_err(json_decode_error)
        }
    }
}

fn json_decode_error(e: CodecError) -> CliError {
    match e {
        CodecError::Json(err) => {
            CliError::Plain(format!("Decoded payload is not valid JSON.\n{err}"))
        }
        other => CliError::Plain(format!("Failed to decode base64 JSON payload.\n{other}")),
    }
}

/// Print the SVG image sub-payload, if the metadata carries one.
fn print_image(metadata: &Value) -> CliResult<()> {
    let Some(image) = metadata.get("image").and_then(Value::as_str) else {
        println!("No image field found in metadata.");
        return Ok(());
    };

    match svg_from_data_uri(image) {
        Ok(Some(svg)) => {
            println!("SVG Image:");
            println!("{svg}");
            Ok(())
        }
        Ok(None) => {
            println!("Image is not an SVG data URI.");
            Ok(())
        }
        Err(e) => Err(CliError::Plain(format!(
            "Failed to decode base64 SVG image.\n{e}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_recognized_base64_uri() {
        let value = decode_token_uri("data:application/json;base64,eyJuYW1lIjoiaGkifQ==").unwrap();
        assert_eq!(value, json!({"name": "hi"}));
    }

    #[test]
    fn test_decode_utf8_uri() {
        let value = decode_token_uri(r#"data:application/json;utf8,{"name":"hi"}"#).unwrap();
        assert_eq!(value, json!({"name": "hi"}));
    }

    #[test]
    fn test_fallback_splits_at_first_comma() {
        // Unrecognized mime, but the payload after the comma is base64 JSON.
        let value = decode_token_uri("data:text/plain;base64,eyJhIjoxfQ==").unwrap();
        assert_eq!(value, json!({"a": 1}));
    }

    #[test]
    fn test_missing_comma_message() {
        let err = decode_token_uri("https://example.com/meta.json").unwrap_err();
        assert_eq!(
            format!("{err}"),
            "Invalid tokenURI format. Missing comma separator."
        );
    }

    #[test]
    fn test_bad_base64_message() {
        let err = decode_token_uri("data:application/json;base64,!!!").unwrap_err();
        assert!(format!("{err}").starts_with("Failed to decode base64 JSON payload."));
    }

    #[test]
    fn test_bad_json_message() {
        // "bm90IGpzb24=" decodes to "not json"
        let err = decode_token_uri("data:application/json;base64,bm90IGpzb24=").unwrap_err();
        assert!(format!("{err}").starts_with("Decoded payload is not valid JSON."));
    }
}
