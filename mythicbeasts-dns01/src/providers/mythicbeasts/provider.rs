//! Mythic Beasts ChallengeProvider trait 实现

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::providers::common::{to_fqdn, un_fqdn};
use crate::traits::ChallengeProvider;
use crate::types::{Dns01Record, challenge_domain};

use super::{CommandVerb, MythicBeastsProvider, build_command, extract_error};

impl MythicBeastsProvider {
    /// Resolve the authority zone of `domain`, without trailing dot.
    pub(crate) async fn authority_zone(&self, domain: &str) -> Result<String> {
        let zone = self
            .zone_resolver
            .find_authority_zone(&to_fqdn(domain))
            .await
            .map_err(|e| ProviderError::ZoneResolution {
                domain: domain.to_string(),
                detail: e.to_string(),
            })?;
        Ok(un_fqdn(&zone).to_string())
    }

    /// Run one challenge command end to end.
    ///
    /// 1. 去掉通配符前缀，计算 DNS-01 记录（fqdn, value）
    /// 2. 解析权威区域并查找对应密码
    /// 3. 提交命令并检查响应
    pub(crate) async fn process_request(
        &self,
        verb: CommandVerb,
        domain: &str,
        _token: &str,
        key_authorization: &str,
    ) -> Result<()> {
        let base_domain = challenge_domain(domain);
        let record = Dns01Record::new(base_domain, key_authorization);

        let zone = self.authority_zone(base_domain).await?;
        let password = self
            .passwords
            .get(&zone)
            .ok_or_else(|| ProviderError::MissingZoneCredential { zone: zone.clone() })?;

        let command = build_command(verb, &record.fqdn, &record.value);
        let body = self.submit_command(&zone, password, &command).await?;

        if let Some(failure) = extract_error(&body) {
            return Err(failure.into_provider_error(domain, &body));
        }

        log::debug!("[mythicbeasts] {verb} {} applied in zone {zone}", record.fqdn);
        Ok(())
    }

    async fn run(
        &self,
        verb: CommandVerb,
        domain: &str,
        token: &str,
        key_authorization: &str,
    ) -> Result<()> {
        self.process_request(verb, domain, token, key_authorization)
            .await
            .inspect_err(|e| {
                if e.is_expected() {
                    log::warn!("[mythicbeasts] {verb} failed for {domain}: {e}");
                } else {
                    log::error!("[mythicbeasts] {verb} failed for {domain}: {e}");
                }
            })
    }
}

#[async_trait]
impl ChallengeProvider for MythicBeastsProvider {
    fn id(&self) -> &'static str {
        "mythicbeasts"
    }

    async fn present(&self, domain: &str, token: &str, key_authorization: &str) -> Result<()> {
        self.run(CommandVerb::Replace, domain, token, key_authorization)
            .await
    }

    async fn cleanup(&self, domain: &str, token: &str, key_authorization: &str) -> Result<()> {
        self.run(CommandVerb::Delete, domain, token, key_authorization)
            .await
    }
}
