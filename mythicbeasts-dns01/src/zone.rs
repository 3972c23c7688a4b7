//! Authority zone resolution
//!
//! Two [`ZoneResolver`] implementations:
//! - [`SoaZoneResolver`] asks recursive nameservers for SOA records, walking
//!   from the full name toward the root until one answers.
//! - [`StaticZoneResolver`] matches against a fixed zone list.

use std::net::IpAddr;

use async_trait::async_trait;
use hickory_resolver::{
    ResolveError, TokioResolver,
    config::{NameServerConfigGroup, ResolverConfig, ResolverOpts},
    name_server::TokioConnectionProvider,
    proto::{
        ProtoErrorKind,
        op::ResponseCode,
        rr::{Record, RecordType},
    },
};
use thiserror::Error;

use crate::providers::common::to_fqdn;
use crate::traits::ZoneResolver;

/// Failure to locate the authority zone of a name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ZoneLookupError {
    /// Every candidate name was queried, none returned an SOA record.
    #[error("no SOA record found for '{fqdn}'{}", last_error_suffix(.last_error.as_deref()))]
    NoSoaRecord {
        fqdn: String,
        last_error: Option<String>,
    },

    /// A nameserver failed to answer for a candidate (SERVFAIL, REFUSED,
    /// timeout, ...). The walk stops here.
    #[error("SOA lookup for '{fqdn}' failed: {detail}")]
    LookupFailed { fqdn: String, detail: String },

    /// The name is not inside any configured zone.
    #[error("'{fqdn}' is not inside any known zone")]
    UnknownZone { fqdn: String },
}

fn last_error_suffix(last_error: Option<&str>) -> String {
    last_error
        .map(|e| format!(" (last error: {e})"))
        .unwrap_or_default()
}

/// Candidate zone names for `fqdn`, longest first, root excluded.
///
/// `www.example.com.` yields `www.example.com.`, `example.com.`, `com.`.
fn zone_candidates(fqdn: &str) -> Vec<String> {
    let fqdn = to_fqdn(fqdn);
    let mut candidates = Vec::new();
    let mut rest = fqdn.as_str();
    while !rest.is_empty() && rest != "." {
        candidates.push(rest.to_string());
        match rest.split_once('.') {
            Some((_, parent)) => rest = parent,
            None => break,
        }
    }
    candidates
}

/// NXDOMAIN or an empty NOERROR answer: the candidate is not a zone apex.
fn is_negative_answer(error: &ResolveError) -> bool {
    error.proto().is_some_and(|proto| {
        matches!(
            proto.kind(),
            ProtoErrorKind::NoRecordsFound {
                response_code: ResponseCode::NXDomain | ResponseCode::NoError,
                ..
            }
        )
    })
}

/// Owner of the first SOA record in an answer, unless the answer went
/// through a CNAME (the SOA then belongs to the alias target's zone).
fn soa_owner<'a>(answers: impl IntoIterator<Item = &'a Record>) -> Option<String> {
    let mut owner = None;
    for record in answers {
        match record.record_type() {
            RecordType::CNAME => return None,
            RecordType::SOA if owner.is_none() => {
                owner = Some(to_fqdn(&record.name().to_string()));
            }
            _ => {}
        }
    }
    owner
}

/// Resolves zones with SOA queries against recursive nameservers.
pub struct SoaZoneResolver {
    resolver: TokioResolver,
}

impl SoaZoneResolver {
    /// Use the host system DNS configuration (e.g. `/etc/resolv.conf`).
    ///
    /// Falls back to Hickory's default upstream set if the system
    /// configuration cannot be loaded.
    pub fn system() -> Self {
        #[cfg(any(unix, target_os = "windows"))]
        {
            match TokioResolver::builder_tokio() {
                Ok(mut builder) => {
                    *builder.options_mut() = resolver_opts();
                    return Self {
                        resolver: builder.build(),
                    };
                }
                Err(e) => {
                    log::warn!(
                        "Failed to load system DNS configuration, falling back to defaults: {e}"
                    );
                }
            }
        }

        Self::with_config(ResolverConfig::default())
    }

    /// Query only the given nameservers (port 53).
    pub fn with_nameservers(nameservers: &[IpAddr]) -> Self {
        Self::with_nameservers_on_port(nameservers, 53)
    }

    /// Query only the given nameservers on a non-standard port.
    pub fn with_nameservers_on_port(nameservers: &[IpAddr], port: u16) -> Self {
        let config = ResolverConfig::from_parts(
            None,
            vec![],
            NameServerConfigGroup::from_ips_clear(nameservers, port, true),
        );
        Self::with_config(config)
    }

    fn with_config(config: ResolverConfig) -> Self {
        let resolver =
            TokioResolver::builder_with_config(config, TokioConnectionProvider::default())
                .with_options(resolver_opts())
                .build();
        Self { resolver }
    }
}

fn resolver_opts() -> ResolverOpts {
    let mut opts = ResolverOpts::default();
    // keep CNAMEs in answers so aliased names can be skipped
    opts.preserve_intermediates = true;
    opts
}

#[async_trait]
impl ZoneResolver for SoaZoneResolver {
    async fn find_authority_zone(&self, fqdn: &str) -> Result<String, ZoneLookupError> {
        let mut last_error = None;

        for candidate in zone_candidates(fqdn) {
            log::debug!("[zone] SOA lookup {candidate}");
            match self.resolver.lookup(candidate.as_str(), RecordType::SOA).await {
                Ok(lookup) => {
                    if let Some(zone) = soa_owner(lookup.record_iter()) {
                        log::debug!("[zone] {fqdn} is in zone {zone}");
                        return Ok(zone);
                    }
                }
                // NODATA / NXDOMAIN on a non-apex name, keep walking up
                Err(e) if is_negative_answer(&e) => last_error = Some(e.to_string()),
                Err(e) => {
                    return Err(ZoneLookupError::LookupFailed {
                        fqdn: candidate,
                        detail: e.to_string(),
                    });
                }
            }
        }

        Err(ZoneLookupError::NoSoaRecord {
            fqdn: fqdn.to_string(),
            last_error,
        })
    }
}

/// Resolves zones against a fixed list, picking the longest matching suffix.
#[derive(Debug, Clone, Default)]
pub struct StaticZoneResolver {
    zones: Vec<String>,
}

impl StaticZoneResolver {
    pub fn new<I, S>(zones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            zones: zones.into_iter().map(|z| to_fqdn(z.as_ref())).collect(),
        }
    }
}

#[async_trait]
impl ZoneResolver for StaticZoneResolver {
    async fn find_authority_zone(&self, fqdn: &str) -> Result<String, ZoneLookupError> {
        let fqdn = to_fqdn(fqdn);
        zone_candidates(&fqdn)
            .into_iter()
            .find(|candidate| self.zones.contains(candidate))
            .ok_or(ZoneLookupError::UnknownZone { fqdn })
    }
}
