//! tokenURI variant parsing.
//!
//! A tokenURI returned by an ERC-721 contract (or pasted by a user) takes
//! one of three recognized forms:
//! - `data:application/json;base64,<payload>` - embedded, base64-encoded JSON
//! - `data:application/json;utf8,<payload>` - embedded, literal JSON
//! - `ipfs://...`, `http://...`, `https://...` - remote metadata pointer
//!
//! Anything else is not a tokenURI we understand, and every caller treats
//! that as "no metadata" rather than an error.
//!
//! # Examples
//!
//! ```
//! use inscribe_codec::token_uri::{TokenUri, RemoteScheme};
//!
//! let parsed = TokenUri::parse("data:application/json;base64,eyJhIjoxfQ==").unwrap();
//! assert_eq!(parsed, TokenUri::DataJsonBase64 { payload: "eyJhIjoxfQ==" });
//!
//! let parsed = TokenUri::parse("ipfs://bafy123/meta.json").unwrap();
//! assert_eq!(
//!     parsed,
//!     TokenUri::Remote { scheme: RemoteScheme::Ipfs, location: "bafy123/meta.json" }
//! );
//!
//! // Unknown schemes parse to None
//! assert_eq!(TokenUri::parse("ar://tx123"), None);
//! ```

/// Prefix of an embedded base64 JSON tokenURI.
pub const JSON_BASE64_PREFIX: &str = "data:application/json;base64,";

/// Prefix of an embedded literal-JSON tokenURI.
pub const JSON_UTF8_PREFIX: &str = "data:application/json;utf8,";

/// Scheme of a remote (non-embedded) tokenURI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteScheme {
    Ipfs,
    Http,
    Https,
}

impl RemoteScheme {
    /// The scheme text as it appears before `://`.
    pub fn as_str(&self) -> &'static str {
        match self {
            RemoteScheme::Ipfs => "ipfs",
            RemoteScheme::Http => "http",
            RemoteScheme::Https => "https",
        }
    }
}

/// Parsed tokenURI variant. Borrows from the input string; a tokenURI is
/// immutable once read, so nothing here ever needs an owned copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenUri<'a> {
    /// `data:application/json;base64,` - payload is the base64 text after
    /// the first comma.
    DataJsonBase64 { payload: &'a str },
    /// `data:application/json;utf8,` - payload is literal JSON text after
    /// the first comma (the payload itself may contain commas).
    DataJsonUtf8 { payload: &'a str },
    /// `ipfs://`, `http://`, or `https://` - location is everything after
    /// the `://` delimiter.
    Remote {
        scheme: RemoteScheme,
        location: &'a str,
    },
}

impl<'a> TokenUri<'a> {
    /// Parse a tokenURI string into its variant.
    ///
    /// Returns `None` for empty input and for any scheme outside the three
    /// recognized forms. Callers map `None` to "no metadata"; this is the
    /// only place scheme dispatch happens, so an unknown scheme can never
    /// fall through to a network fetch.
    pub fn parse(uri: &'a str) -> Option<TokenUri<'a>> {
        if uri.is_empty() {
            return None;
        }
        if let Some(payload) = uri.strip_prefix(JSON_BASE64_PREFIX) {
            return Some(TokenUri::DataJsonBase64 { payload });
        }
        if let Some(payload) = uri.strip_prefix(JSON_UTF8_PREFIX) {
            return Some(TokenUri::DataJsonUtf8 { payload });
        }
        if let Some(location) = uri.strip_prefix("ipfs://") {
            return Some(TokenUri::Remote {
                scheme: RemoteScheme::Ipfs,
                location,
            });
        }
        if let Some(location) = uri.strip_prefix("https://") {
            return Some(TokenUri::Remote {
                scheme: RemoteScheme::Https,
                location,
            });
        }
        if let Some(location) = uri.strip_prefix("http://") {
            return Some(TokenUri::Remote {
                scheme: RemoteScheme::Http,
                location,
            });
        }
        None
    }

    /// True for the two embedded `data:application/json` variants.
    pub fn is_embedded(&self) -> bool {
        matches!(
            self,
            TokenUri::DataJsonBase64 { .. } | TokenUri::DataJsonUtf8 { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_base64_variant() {
        let parsed = TokenUri::parse("data:application/json;base64,eyJuYW1lIjoiaGkifQ==");
        assert_eq!(
            parsed,
            Some(TokenUri::DataJsonBase64 {
                payload: "eyJuYW1lIjoiaGkifQ=="
            })
        );
    }

    #[test]
    fn test_parse_utf8_variant_keeps_commas() {
        let parsed = TokenUri::parse(r#"data:application/json;utf8,{"a":1,"b":2}"#);
        assert_eq!(
            parsed,
            Some(TokenUri::DataJsonUtf8 {
                payload: r#"{"a":1,"b":2}"#
            })
        );
    }

    #[test]
    fn test_parse_remote_schemes() {
        assert_eq!(
            TokenUri::parse("ipfs://bafy123"),
            Some(TokenUri::Remote {
                scheme: RemoteScheme::Ipfs,
                location: "bafy123"
            })
        );
        assert_eq!(
            TokenUri::parse("https://example.com/meta.json"),
            Some(TokenUri::Remote {
                scheme: RemoteScheme::Https,
                location: "example.com/meta.json"
            })
        );
        assert_eq!(
            TokenUri::parse("http://example.com/meta.json"),
            Some(TokenUri::Remote {
                scheme: RemoteScheme::Http,
                location: "example.com/meta.json"
            })
        );
    }

    #[test]
    fn test_reject_unknown_scheme() {
        assert_eq!(TokenUri::parse("ar://tx123"), None);
        assert_eq!(TokenUri::parse("data:image/png;base64,AAAA"), None);
        assert_eq!(TokenUri::parse("ftp://example.com/x"), None);
    }

    #[test]
    fn test_reject_empty() {
        assert_eq!(TokenUri::parse(""), None);
    }

    #[test]
    fn test_empty_payload_is_still_embedded() {
        // An empty payload parses; it fails later at the decode step.
        let parsed = TokenUri::parse("data:application/json;base64,").unwrap();
        assert!(parsed.is_embedded());
    }

    #[test]
    fn test_prefix_match_is_case_sensitive() {
        assert_eq!(TokenUri::parse("DATA:application/json;base64,eyJ9"), None);
    }
}
