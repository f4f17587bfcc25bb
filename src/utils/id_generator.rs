//! Random identifier generation for embedded records.
//!
//! Bio links and article images live inside their parent row as JSON, so they
//! need identifiers that do not come from a database sequence.

use base64::Engine as _;

/// Length of random bytes before base64 encoding.
const ID_LENGTH_BYTES: usize = 9;

/// Generates a random URL-safe identifier.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing a 12-character id.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
///
/// # Examples
///
/// ```ignore
/// let id = generate_id();
/// assert_eq!(id.len(), 12);
/// ```
pub fn generate_id() -> String {
    let mut buffer = [0u8; ID_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_id_has_correct_length() {
        assert_eq!(generate_id().len(), 12);
    }

    #[test]
    fn test_generate_id_url_safe_characters() {
        let id = generate_id();
        assert!(id.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_'));
        assert!(!id.contains('='));
    }

    #[test]
    fn test_generate_id_produces_unique_ids() {
        let ids: HashSet<String> = (0..1000).map(|_| generate_id()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
