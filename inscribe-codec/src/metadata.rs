//! Typed token metadata record.
//!
//! The decoder stays schema-free (`serde_json::Value`); this struct is the
//! typed view used when *building* metadata to mint. Unknown keys are
//! captured in `extra` so a `Value -> Metadata -> Value` trip is lossless.

use crate::data_uri::encode_to_data_uri;
use crate::error::Result;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// ERC-721 style token metadata.
///
/// Optional fields that are `None` are omitted from the serialized JSON
/// entirely, so a minimal record encodes to `{"name":...,"description":...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Metadata {
    /// Human title.
    pub name: String,
    /// Description text.
    pub description: String,
    /// Image pointer: a `data:image/...` URI, an `https://` URL, or an
    /// `ipfs://` URI.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub external_url: Option<String>,
    /// Minting wallet address text.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub created_by: Option<String>,
    /// ISO-8601 creation time.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub timestamp: Option<String>,
    /// Any keys beyond the known set, preserved verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl Metadata {
    /// Minimal record with just the required fields.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Metadata {
            name: name.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    /// Stamp `timestamp` with the current UTC time (ISO-8601, millisecond
    /// precision, `Z` suffix).
    pub fn stamp_now(mut self) -> Self {
        self.timestamp = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true));
        self
    }

    /// Build a typed record from decoded JSON. Unknown keys land in `extra`.
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Encode this record as a `data:application/json;base64,` tokenURI.
    pub fn to_token_uri(&self) -> Result<String> {
        encode_to_data_uri(self)
    }
}
