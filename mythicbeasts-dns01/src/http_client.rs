//! Generic HTTP client tools
//!
//! Sending the request, logging, and reading the response body are the same
//! for every call. Building the request (URL, form fields) stays with the
//! provider.

use reqwest::RequestBuilder;

use crate::error::ProviderError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns response text
    ///
    /// No retries are attempted: a failed send is returned to the caller as is.
    /// The status code is only logged, the command API reports success or
    /// failure in the body.
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor (URL, headers, body)
    /// * `action` - request summary (for logging, must not carry secrets)
    ///
    /// # Returns
    /// * `Ok(response_text)` - full response text
    /// * `Err(ProviderError::Timeout)` - the request exceeded the client timeout
    /// * `Err(ProviderError::NetworkError)` - any other transport failure
    pub async fn execute_request(
        request_builder: RequestBuilder,
        action: &str,
    ) -> Result<String, ProviderError> {
        log::debug!("[mythicbeasts] POST {action}");

        let response = request_builder.send().await.map_err(transport_error)?;

        let status = response.status();
        log::debug!("[mythicbeasts] Response Status: {}", status.as_u16());
        if !status.is_success() {
            log::warn!("[mythicbeasts] Unexpected HTTP status {status}");
        }

        let response_text = response.text().await.map_err(|e| {
            if e.is_timeout() {
                transport_error(e)
            } else {
                ProviderError::NetworkError {
                    detail: format!("Failed to read response body: {e}"),
                }
            }
        })?;

        log::debug!(
            "[mythicbeasts] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok(response_text)
    }
}

/// Map a transport failure to `Timeout` or `NetworkError`.
fn transport_error(e: reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Timeout {
            detail: e.to_string(),
        }
    } else {
        ProviderError::NetworkError {
            detail: e.to_string(),
        }
    }
}
