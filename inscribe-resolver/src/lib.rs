//! # inscribe-resolver
//!
//! Resolves an arbitrary tokenURI string to JSON metadata, best-effort:
//!
//! 1. Fast path: if the string embeds a `data:application/json` payload,
//!    decode it locally - no network access.
//! 2. `ipfs://` URIs are rewritten to an HTTPS gateway URL
//!    (`https://ipfs.io/ipfs/` by default).
//! 3. Anything that is not HTTP(S) after rewriting resolves to absence.
//! 4. One GET, no retries, no caching. Any fetch failure (network,
//!    non-2xx, bad JSON body) is logged with the original URI and
//!    resolves to absence - callers never see an error from `resolve`.

pub mod error;

pub use error::{ResolveError, Result};

use inscribe_codec::{data_uri_to_json, RemoteScheme, TokenUri};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Default IPFS gateway base the `ipfs://` scheme is rewritten onto.
pub const DEFAULT_IPFS_GATEWAY: &str = "https://ipfs.io/ipfs/";

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Best-effort tokenURI resolver.
///
/// Holds one `reqwest::Client`; construction is cheap enough for CLI use
/// and the client is reused across `resolve` calls when long-lived.
#[derive(Debug, Clone)]
pub struct Resolver {
    http: reqwest::Client,
    gateway: String,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(DEFAULT_IPFS_GATEWAY)
    }
}

impl Resolver {
    /// Create a resolver with a custom IPFS gateway base.
    ///
    /// The gateway is normalized to end with a single `/` so the CID path
    /// can be appended unchanged.
    pub fn new(gateway: impl Into<String>) -> Self {
        let raw = gateway.into();
        let gateway = format!("{}/", raw.trim_end_matches('/'));
        let http = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");
        Self { http, gateway }
    }

    /// The normalized gateway base for this resolver.
    pub fn gateway(&self) -> &str {
        &self.gateway
    }

    /// Rewrite a tokenURI to the URL the fallback fetch would hit.
    ///
    /// `None` when no fetch would happen: embedded data URIs (handled by
    /// the fast path) and unrecognized schemes.
    pub fn fetch_url(&self, uri: &str) -> Option<String> {
        match TokenUri::parse(uri)? {
            TokenUri::Remote {
                scheme: RemoteScheme::Ipfs,
                location,
            } => Some(format!("{}{}", self.gateway, location)),
            TokenUri::Remote { .. } => Some(uri.to_string()),
            TokenUri::DataJsonBase64 { .. } | TokenUri::DataJsonUtf8 { .. } => None,
        }
    }

    /// Resolve a tokenURI to JSON metadata, or absence.
    ///
    /// Exactly one network request happens, and only on the remote
    /// fallback path. Every failure mode resolves to `None`.
    pub async fn resolve(&self, uri: &str) -> Option<Value> {
        // Fast path: embedded metadata decodes locally. A corrupt embedded
        // payload also lands here as None and must not fall through to a
        // fetch - fetch_url returns None for the data variants.
        if let Some(metadata) = data_uri_to_json(uri) {
            return Some(metadata);
        }

        let url = match self.fetch_url(uri) {
            Some(url) => url,
            None => {
                debug!(uri = %uri, "tokenURI has no fetchable form");
                return None;
            }
        };

        match self.fetch_json(&url).await {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(uri = %uri, error = %e, "metadata fetch failed");
                None
            }
        }
    }

    /// Single GET of a metadata URL, parsed as JSON.
    ///
    /// Strict inner step with distinct failure modes; `resolve` merges
    /// them into absence.
    async fn fetch_json(&self, url: &str) -> Result<Value> {
        debug!(url = %url, "fetching token metadata");
        let resp = self.http.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ResolveError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
