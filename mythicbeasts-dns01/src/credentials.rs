//! Zone-keyed credential store
//!
//! Mythic Beasts issues one API password per zone. Credentials are supplied
//! as a flat list of space-separated pairs:
//!
//! ```text
//! example.com password1 example.org password2
//! ```

use std::collections::HashMap;
use std::fmt;

use crate::error::{ProviderError, Result};
use crate::utils::log_sanitizer::mask_secret;

/// Environment variable holding the zone/password pairs.
pub const PASSWORDS_ENV_VAR: &str = "MYTHICBEASTS_API_PASSWORDS";

/// 凭证映射类型：zone -> password
///
/// Keys are zone names without a trailing dot and are case-sensitive.
/// Built once and read-only afterwards.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CredentialMap {
    passwords: HashMap<String, String>,
}

impl CredentialMap {
    /// Password configured for `zone`, if any.
    pub fn get(&self, zone: &str) -> Option<&str> {
        self.passwords.get(zone).map(String::as_str)
    }

    /// Number of configured zones.
    pub fn len(&self) -> usize {
        self.passwords.len()
    }

    /// `true` when no zone is configured.
    pub fn is_empty(&self) -> bool {
        self.passwords.is_empty()
    }
}

impl fmt::Debug for CredentialMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.passwords
                    .iter()
                    .map(|(zone, password)| (zone, mask_secret(password))),
            )
            .finish()
    }
}

/// Parse a space-separated list of zone/password pairs.
///
/// The input is split on single spaces, without collapsing runs, so every
/// token counts. An odd token count (an empty string is one empty token) is
/// rejected. A zone listed twice keeps its last password.
pub fn parse_passwords(raw: &str) -> Result<CredentialMap> {
    let tokens: Vec<&str> = raw.split(' ').collect();
    if raw.is_empty() || tokens.len() % 2 != 0 {
        return Err(ProviderError::InvalidCredentialFormat {
            token_count: if raw.is_empty() { 0 } else { tokens.len() },
        });
    }

    let passwords = tokens
        .chunks_exact(2)
        .map(|pair| (pair[0].to_string(), pair[1].to_string()))
        .collect();

    Ok(CredentialMap { passwords })
}
