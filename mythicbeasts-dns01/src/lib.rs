//! # mythicbeasts-dns01
//!
//! ACME DNS-01 challenge provider for the
//! [Mythic Beasts Primary DNS API](https://www.mythic-beasts.com/support/api/primary).
//!
//! The API is a plain-text command protocol: every request is a form POST
//! carrying a zone, that zone's API password, and a command such as
//! `REPLACE _acme-challenge.example.com. 3600 TXT <value>`.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation and static builds.
//!
//! ## Credentials
//!
//! Mythic Beasts issues one password per zone. Pass them as space-separated
//! pairs, directly or through `MYTHICBEASTS_API_PASSWORDS`:
//!
//! ```text
//! MYTHICBEASTS_API_PASSWORDS="example.com password1 example.org password2"
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mythicbeasts_dns01::{ChallengeProvider, MythicBeastsProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = MythicBeastsProvider::from_env()?;
//!
//!     provider.present("www.example.com", "token", "token.thumbprint").await?;
//!     // ... let the ACME server validate ...
//!     provider.cleanup("www.example.com", "token", "token.thumbprint").await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! The authority zone of each domain is found with SOA lookups through the
//! system resolver. Use [`MythicBeastsProviderBuilder::zone_resolver`] to
//! supply another [`ZoneResolver`], e.g. a [`StaticZoneResolver`].
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError):
//!
//! - [`ProviderError::MissingZoneCredential`] — no password for the domain's zone
//! - [`ProviderError::ZoneResolution`] — the authority zone could not be found
//! - [`ProviderError::RemoteApi`] — the API rejected the command
//! - [`ProviderError::Timeout`] / [`ProviderError::NetworkError`] — transport failure
//!
//! Nothing is retried internally.

mod credentials;
mod error;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;
mod zone;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export traits
pub use traits::{ChallengeProvider, ZoneResolver};

// Re-export types
pub use credentials::{CredentialMap, PASSWORDS_ENV_VAR, parse_passwords};
pub use types::{ACME_CHALLENGE_RECORD, Dns01Record, challenge_domain, challenge_value};
pub use zone::{SoaZoneResolver, StaticZoneResolver, ZoneLookupError};

// Re-export the provider
pub use providers::{
    CommandVerb, MythicBeastsProvider, MythicBeastsProviderBuilder, RemoteFailure, build_command,
    extract_error,
};
