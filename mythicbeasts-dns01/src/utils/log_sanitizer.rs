//! Log sanitization utilities
//!
//! Zone passwords travel in the request body, and the API echoes commands
//! back in its responses. Nothing from either should reach the logs verbatim.

/// Maximum number of bytes of a response body to include in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading characters of a secret left visible when masked.
const MASK_VISIBLE: usize = 2;

fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a response body for safe logging.
///
/// Bodies within the limit are returned unchanged, longer ones are cut on a
/// char boundary and suffixed with their total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Mask a secret, keeping only its first couple of characters.
///
/// `"password123"` becomes `"pa*********"`. Secrets no longer than the
/// visible prefix are fully masked.
pub fn mask_secret(secret: &str) -> String {
    let total = secret.chars().count();
    if total <= MASK_VISIBLE {
        return "*".repeat(total);
    }
    let visible: String = secret.chars().take(MASK_VISIBLE).collect();
    format!("{visible}{}", "*".repeat(total - MASK_VISIBLE))
}
