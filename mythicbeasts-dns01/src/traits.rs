use async_trait::async_trait;

use crate::error::Result;
use crate::zone::ZoneLookupError;

/// ACME DNS-01 挑战 Provider Trait
///
/// The capability an ACME client needs from a DNS provider: publish the
/// challenge TXT record, then remove it once validation is over.
#[async_trait]
pub trait ChallengeProvider: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// Publish the TXT record for `domain`.
    ///
    /// `token` is part of the challenge contract but the record only depends
    /// on `domain` and `key_authorization`.
    async fn present(&self, domain: &str, token: &str, key_authorization: &str) -> Result<()>;

    /// Remove the TXT record published by [`present`](Self::present).
    async fn cleanup(&self, domain: &str, token: &str, key_authorization: &str) -> Result<()>;
}

/// 权威区域解析 Trait
///
/// Finds the zone a name is hosted in, which may be any ancestor of it.
#[async_trait]
pub trait ZoneResolver: Send + Sync {
    /// Resolve the authority zone for `fqdn`.
    ///
    /// Both the argument and the returned zone carry a trailing dot.
    async fn find_authority_zone(
        &self,
        fqdn: &str,
    ) -> std::result::Result<String, ZoneLookupError>;
}
