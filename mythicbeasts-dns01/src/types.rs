//! Shared data types.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::providers::common::to_fqdn;

/// ACME challenge record label.
pub const ACME_CHALLENGE_RECORD: &str = "_acme-challenge";

/// A DNS-01 challenge record, derived from a domain and a key authorization.
///
/// Nothing is stored: the record is computed per request and consumed
/// transiently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dns01Record {
    /// Record name with trailing dot, e.g. `_acme-challenge.example.com.`
    pub fqdn: String,
    /// Base64url (unpadded) SHA-256 digest of the key authorization.
    pub value: String,
}

/// Domain whose zone receives the challenge for `domain`.
///
/// A wildcard prefix (`*.`) is dropped: `*.example.com` is validated at
/// `_acme-challenge.example.com.`.
pub fn challenge_domain(domain: &str) -> &str {
    domain.strip_prefix("*.").unwrap_or(domain)
}

impl Dns01Record {
    /// Derive the challenge record for `domain` (already passed through
    /// [`challenge_domain`]).
    pub fn new(domain: &str, key_authorization: &str) -> Self {
        Self {
            fqdn: to_fqdn(&format!("{ACME_CHALLENGE_RECORD}.{domain}")),
            value: challenge_value(key_authorization),
        }
    }
}

/// Compute the DNS-01 TXT value for a key authorization.
pub fn challenge_value(key_authorization: &str) -> String {
    let digest = Sha256::digest(key_authorization.as_bytes());
    URL_SAFE_NO_PAD.encode(digest)
}
