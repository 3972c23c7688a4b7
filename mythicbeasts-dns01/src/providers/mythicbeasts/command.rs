//! Mythic Beasts command templates

use std::fmt;

/// TTL of challenge records, in seconds.
pub(crate) const RECORD_TTL: u32 = 3600;

/// Command verbs used for challenge records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandVerb {
    /// Replace all TXT records at the name with the given value.
    Replace,
    /// Delete the TXT record with the given value.
    Delete,
}

impl CommandVerb {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Replace => "REPLACE",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for CommandVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render `<VERB> <fqdn> 3600 TXT <value>`.
///
/// No escaping is done here: the fqdn is a domain name and the value is
/// base64url, and the form encoding of the request covers the rest.
pub fn build_command(verb: CommandVerb, fqdn: &str, value: &str) -> String {
    format!("{verb} {fqdn} {RECORD_TTL} TXT {value}")
}
