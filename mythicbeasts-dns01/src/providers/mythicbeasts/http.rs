//! Mythic Beasts HTTP 请求方法

use crate::error::Result;
use crate::http_client::HttpUtils;

use super::MythicBeastsProvider;

impl MythicBeastsProvider {
    /// Submit one command for `zone` and return the raw response body.
    ///
    /// Fields are form-encoded in the order `command`, `domain`, `password`.
    /// The password is never logged.
    pub(crate) async fn submit_command(
        &self,
        zone: &str,
        password: &str,
        command: &str,
    ) -> Result<String> {
        let form = [("command", command), ("domain", zone), ("password", password)];
        let request = self.client.post(self.endpoint.clone()).form(&form);

        HttpUtils::execute_request(request, &format!("{} [{zone}] {command}", self.endpoint))
            .await
    }
}
