//! Mythic Beasts Primary DNS Provider

mod command;
mod error;
mod http;
mod provider;

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Url};

use crate::credentials::{CredentialMap, PASSWORDS_ENV_VAR, parse_passwords};
use crate::error::{ProviderError, Result};
use crate::providers::common::{DEFAULT_REQUEST_TIMEOUT_SECS, create_http_client};
use crate::traits::ZoneResolver;
use crate::zone::SoaZoneResolver;

pub use command::{CommandVerb, build_command};
pub use error::{RemoteFailure, extract_error};

pub(crate) const MYTHIC_BEASTS_API_BASE: &str = "https://dnsapi.mythic-beasts.com/";

/// Mythic Beasts DNS-01 challenge provider
///
/// Holds one API password per zone. Read-only after construction, so a
/// single instance can serve concurrent challenges.
pub struct MythicBeastsProvider {
    pub(crate) client: Client,
    pub(crate) endpoint: Url,
    pub(crate) passwords: CredentialMap,
    pub(crate) zone_resolver: Arc<dyn ZoneResolver>,
}

impl std::fmt::Debug for MythicBeastsProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MythicBeastsProvider")
            .field("client", &self.client)
            .field("endpoint", &self.endpoint)
            .field("passwords", &self.passwords)
            .finish_non_exhaustive()
    }
}

/// Mythic Beasts Provider Builder
pub struct MythicBeastsProviderBuilder {
    passwords: String,
    endpoint: String,
    timeout: Duration,
    zone_resolver: Option<Arc<dyn ZoneResolver>>,
}

impl MythicBeastsProviderBuilder {
    fn new(passwords: String) -> Self {
        Self {
            passwords,
            endpoint: MYTHIC_BEASTS_API_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            zone_resolver: None,
        }
    }

    /// Override the API endpoint (test servers, proxies).
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the per-request timeout (default 30s).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a custom authority zone resolver instead of SOA lookups.
    pub fn zone_resolver(mut self, resolver: Arc<dyn ZoneResolver>) -> Self {
        self.zone_resolver = Some(resolver);
        self
    }

    pub fn build(self) -> Result<MythicBeastsProvider> {
        if self.passwords.is_empty() {
            return Err(ProviderError::MissingCredentials {
                env_var: PASSWORDS_ENV_VAR.to_string(),
            });
        }
        let passwords = parse_passwords(&self.passwords)?;

        let endpoint = Url::parse(&self.endpoint).map_err(|e| ProviderError::Configuration {
            detail: format!("invalid endpoint '{}': {e}", self.endpoint),
        })?;

        let zone_resolver = self
            .zone_resolver
            .unwrap_or_else(|| Arc::new(SoaZoneResolver::system()));

        log::debug!(
            "[mythicbeasts] Provider configured for {} zone(s), endpoint {endpoint}",
            passwords.len()
        );

        Ok(MythicBeastsProvider {
            client: create_http_client(self.timeout)?,
            endpoint,
            passwords,
            zone_resolver,
        })
    }
}

impl MythicBeastsProvider {
    /// Create a provider from a `"<zone> <password> ..."` string with default settings.
    pub fn new(passwords: impl Into<String>) -> Result<Self> {
        Self::builder(passwords).build()
    }

    /// Create a provider from the `MYTHICBEASTS_API_PASSWORDS` environment variable.
    pub fn from_env() -> Result<Self> {
        let passwords = std::env::var(PASSWORDS_ENV_VAR).unwrap_or_default();
        Self::new(passwords)
    }

    pub fn builder(passwords: impl Into<String>) -> MythicBeastsProviderBuilder {
        MythicBeastsProviderBuilder::new(passwords.into())
    }

    /// API endpoint requests are sent to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Zones with a configured password.
    pub fn credentials(&self) -> &CredentialMap {
        &self.passwords
    }
}
