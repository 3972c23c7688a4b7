use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for all challenge provider operations.
///
/// Every variant carries the structured context (domain, zone, raw message)
/// needed to diagnose the failure. All variants are serializable for
/// structured error reporting.
///
/// None of these errors are retried internally. Retry policy, if any, belongs
/// to the orchestration layer calling [`present`](crate::ChallengeProvider::present)
/// and [`cleanup`](crate::ChallengeProvider::cleanup).
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// No credential string was supplied at all.
    #[error("Mythic Beasts credentials missing (set {env_var})")]
    MissingCredentials {
        /// Environment variable the credentials are expected in.
        env_var: String,
    },

    /// The credential list could not be split into zone/secret pairs.
    #[error(
        "Error parsing Mythic Beasts API passwords: uneven number of parts ({token_count}). \
         Please ensure you are using the format 'example.com mypassword'"
    )]
    InvalidCredentialFormat {
        /// Number of space-separated tokens found.
        token_count: usize,
    },

    /// The authority zone of a domain could not be determined.
    #[error("Could not determine zone for domain '{domain}': {detail}")]
    ZoneResolution {
        /// Domain whose zone was being resolved.
        domain: String,
        /// Underlying resolver failure.
        detail: String,
    },

    /// No secret is configured for the resolved authority zone.
    ///
    /// This is a configuration error and will not succeed on retry.
    #[error("Missing password for the authentication zone '{zone}'")]
    MissingZoneCredential {
        /// Authority zone (without trailing dot).
        zone: String,
    },

    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    #[error("Network error: {detail}")]
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    #[error("Request timeout: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The API answered with a negative acknowledgement.
    #[error("Unable to change TXT record for domain '{domain}': {message}")]
    RemoteApi {
        /// Domain the challenge record belongs to.
        domain: String,
        /// Reason extracted from the response body.
        message: String,
    },

    /// The API answered with a negative acknowledgement whose reason could not be extracted.
    #[error("Unable to change TXT record for domain '{domain}': Unknown error")]
    UnknownRemote {
        /// Domain the challenge record belongs to.
        domain: String,
        /// The raw response body.
        raw_message: String,
    },

    /// Invalid provider configuration (bad endpoint URL, HTTP client setup failure).
    #[error("Invalid configuration: {detail}")]
    Configuration {
        /// Details about the configuration problem.
        detail: String,
    },
}

impl ProviderError {
    /// 是否为预期行为（配置错误、远端拒绝等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::MissingCredentials { .. }
                | Self::InvalidCredentialFormat { .. }
                | Self::MissingZoneCredential { .. }
                | Self::RemoteApi { .. }
                | Self::UnknownRemote { .. }
                | Self::Configuration { .. }
        )
    }
}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_missing_credentials() {
        let e = ProviderError::MissingCredentials {
            env_var: "MYTHICBEASTS_API_PASSWORDS".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Mythic Beasts credentials missing (set MYTHICBEASTS_API_PASSWORDS)"
        );
    }

    #[test]
    fn display_invalid_credential_format() {
        let e = ProviderError::InvalidCredentialFormat { token_count: 3 };
        assert!(e.to_string().contains("uneven number of parts (3)"));
    }

    #[test]
    fn display_zone_resolution() {
        let e = ProviderError::ZoneResolution {
            domain: "www.example.com".to_string(),
            detail: "no SOA found".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Could not determine zone for domain 'www.example.com': no SOA found"
        );
    }

    #[test]
    fn display_missing_zone_credential() {
        let e = ProviderError::MissingZoneCredential {
            zone: "example.org".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Missing password for the authentication zone 'example.org'"
        );
    }

    #[test]
    fn display_network_error() {
        let e = ProviderError::NetworkError {
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "Network error: connection refused");
    }

    #[test]
    fn display_timeout() {
        let e = ProviderError::Timeout {
            detail: "30s elapsed".to_string(),
        };
        assert_eq!(e.to_string(), "Request timeout: 30s elapsed");
    }

    #[test]
    fn display_remote_api() {
        let e = ProviderError::RemoteApi {
            domain: "example.com".to_string(),
            message: "No such record".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Unable to change TXT record for domain 'example.com': No such record"
        );
    }

    #[test]
    fn display_unknown_remote() {
        let e = ProviderError::UnknownRemote {
            domain: "example.com".to_string(),
            raw_message: "Nfoo".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Unable to change TXT record for domain 'example.com': Unknown error"
        );
    }

    #[test]
    fn expected_vs_unexpected() {
        assert!(
            ProviderError::MissingZoneCredential {
                zone: "example.com".into()
            }
            .is_expected()
        );
        assert!(
            ProviderError::RemoteApi {
                domain: "example.com".into(),
                message: "x".into()
            }
            .is_expected()
        );
        assert!(!ProviderError::NetworkError { detail: "x".into() }.is_expected());
        assert!(!ProviderError::Timeout { detail: "x".into() }.is_expected());
        assert!(
            !ProviderError::ZoneResolution {
                domain: "example.com".into(),
                detail: "x".into()
            }
            .is_expected()
        );
    }

    #[test]
    fn serialize_tagged_with_code() {
        let e = ProviderError::MissingZoneCredential {
            zone: "example.com".to_string(),
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"MissingZoneCredential\""));
        assert!(json.contains("\"zone\":\"example.com\""));
    }

    #[test]
    fn deserialize_json_round_trip() {
        let original = ProviderError::RemoteApi {
            domain: "example.com".to_string(),
            message: "Can't have multiple identical records".to_string(),
        };
        let json = serde_json::to_string(&original).unwrap();
        let back: ProviderError = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_string(), original.to_string());
    }
}
