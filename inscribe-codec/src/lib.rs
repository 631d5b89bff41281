//! # inscribe-codec
//!
//! Pure codec between structured token metadata and the self-contained
//! `data:application/json;base64,...` tokenURI form used for on-chain
//! inscriptions.
//!
//! This crate provides:
//! - `TokenUri`: the three recognized tokenURI variants as an enum
//! - encode/decode between JSON values and data URIs
//! - SVG image sub-payload extraction
//! - the typed `Metadata` record the mint helper builds
//!
//! Everything here is synchronous and I/O-free; resolution of remote
//! (`ipfs://` / `https://`) tokenURIs lives in `inscribe-resolver`.
//!
//! ## Example
//!
//! ```
//! use inscribe_codec::{Metadata, data_uri::data_uri_to_json};
//!
//! let meta = Metadata::new("my inscription", "fully on-chain");
//! let uri = meta.to_token_uri().unwrap();
//! assert!(uri.starts_with("data:application/json;base64,"));
//!
//! let decoded = data_uri_to_json(&uri).unwrap();
//! assert_eq!(decoded["name"], "my inscription");
//! ```

pub mod data_uri;
pub mod error;
pub mod image;
pub mod metadata;
pub mod token_uri;
pub mod transcode;

pub use data_uri::{
    data_uri_to_json, decode_base64_json, encode_to_data_uri, svg_from_data_uri,
    SVG_BASE64_PREFIX,
};
pub use error::{CodecError, Result};
pub use metadata::Metadata;
pub use token_uri::{RemoteScheme, TokenUri, JSON_BASE64_PREFIX, JSON_UTF8_PREFIX};
pub use transcode::{Base64Codec, StandardCodec};
