//! Mythic Beasts response error extraction
//!
//! Reference: <https://www.mythic-beasts.com/support/api/primary>
//!
//! Successful responses echo the applied command, starting with the verb.
//! Failures start with `N`, then echo the command and append a reason. The
//! reason is separated by `;` on some responses and by `:` on others.

use crate::error::ProviderError;

/// A negative acknowledgement from the command API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteFailure {
    /// The reason could be extracted.
    Message(String),
    /// Neither delimiter produced a reason.
    Unknown,
}

impl RemoteFailure {
    /// Attach the domain and raw body, producing the public error.
    pub(crate) fn into_provider_error(self, domain: &str, body: &str) -> ProviderError {
        match self {
            Self::Message(message) => ProviderError::RemoteApi {
                domain: domain.to_string(),
                message,
            },
            Self::Unknown => ProviderError::UnknownRemote {
                domain: domain.to_string(),
                raw_message: body.to_string(),
            },
        }
    }
}

/// Split `body` on `delimiter`, returning the second part if there are exactly two.
fn reason_after(body: &str, delimiter: char) -> Option<&str> {
    let parts: Vec<&str> = body.split(delimiter).collect();
    match parts.as_slice() {
        [_, reason] => Some(reason),
        _ => None,
    }
}

/// Extract the failure reason from a response body.
///
/// Returns `None` when the body does not start with `N`. Otherwise `;` is
/// tried first, then `:`, each requiring exactly one occurrence.
pub fn extract_error(body: &str) -> Option<RemoteFailure> {
    if !body.starts_with('N') {
        return None;
    }

    let failure = reason_after(body, ';')
        .or_else(|| reason_after(body, ':'))
        .map_or(RemoteFailure::Unknown, |reason| {
            RemoteFailure::Message(reason.trim().to_string())
        });

    Some(failure)
}
