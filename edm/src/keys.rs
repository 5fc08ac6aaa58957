//! Deterministic surrogate key derivation.
//!
//! Every derived key is a pure function of its ordered input fields: the
//! fields are joined with a fixed delimiter and digested with SHA-256, so
//! re-running the pipeline on unchanged data reproduces the same keys and
//! never creates duplicate logical rows.

use sha2::{Digest, Sha256};

/// Delimiter between ordered key fields, fixed by the target data model.
const KEY_DELIMITER: &str = "-";

/// Derives a surrogate key from ordered field values.
///
/// Deterministic and order-sensitive: swapping two non-equal fields changes
/// the output. Callers are responsible for passing every field the schema
/// requires; the per-schema wrappers below assert those preconditions.
pub fn derive_key(fields: &[&str]) -> String {
    debug_assert!(!fields.is_empty(), "derive_key requires at least one field");

    let mut hasher = Sha256::new();
    hasher.update(fields.join(KEY_DELIMITER).as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Derives the key of a consent event row.
///
/// The sub-level is explicitly allowed to be empty; all other fields are
/// required, and passing an empty one is a programming defect.
pub fn consent_event_key(
    consumer_key: &str,
    consent_date: &str,
    consent_status: &str,
    opco_code: &str,
    sub_level: &str,
) -> String {
    debug_assert!(!consumer_key.is_empty(), "consumer key must not be empty");
    debug_assert!(!consent_date.is_empty(), "consent date must not be empty");
    debug_assert!(
        !consent_status.is_empty(),
        "consent status must not be empty"
    );
    debug_assert!(!opco_code.is_empty(), "opco code must not be empty");

    derive_key(&[
        consumer_key,
        consent_date,
        consent_status,
        opco_code,
        sub_level,
    ])
}

/// Derives the key of an online engagement row.
pub fn online_engagement_key(consumer_key: &str, engagement_date: &str, url: &str) -> String {
    debug_assert!(!consumer_key.is_empty(), "consumer key must not be empty");
    debug_assert!(
        !engagement_date.is_empty(),
        "engagement date must not be empty"
    );
    debug_assert!(!url.is_empty(), "url must not be empty");

    derive_key(&[consumer_key, engagement_date, url])
}

/// Derives the key of an affinity row.
pub fn affinity_key(consumer_key: &str, category: &str, subcategory: &str) -> String {
    debug_assert!(!consumer_key.is_empty(), "consumer key must not be empty");
    debug_assert!(!category.is_empty(), "affinity category must not be empty");
    debug_assert!(
        !subcategory.is_empty(),
        "affinity subcategory must not be empty"
    );

    derive_key(&[consumer_key, category, subcategory])
}

#[cfg(test)]
mod tests {
    use super::*;
    use sha2::{Digest, Sha256};

    #[test]
    fn derive_key_is_deterministic() {
        let first = derive_key(&["abc123", "2022-01-05T10:00:00", "www.unknown.com"]);
        let second = derive_key(&["abc123", "2022-01-05T10:00:00", "www.unknown.com"]);

        assert_eq!(first, second);
    }

    #[test]
    fn derive_key_is_order_sensitive() {
        let forward = derive_key(&["a", "b"]);
        let backward = derive_key(&["b", "a"]);

        assert_ne!(forward, backward);
    }

    #[test]
    fn derive_key_matches_sha256_of_joined_fields() {
        let mut hasher = Sha256::new();
        hasher.update(b"abc123-ALCOHOLIC_BEER-LAGER");
        let expected = format!("{:x}", hasher.finalize());

        assert_eq!(
            derive_key(&["abc123", "ALCOHOLIC_BEER", "LAGER"]),
            expected
        );
        assert_eq!(affinity_key("abc123", "ALCOHOLIC_BEER", "LAGER"), expected);
    }

    #[test]
    fn keys_are_fixed_length_hex() {
        let key = online_engagement_key("abc123", "2022-01-05T10:00:00", "www.unknown.com");

        assert_eq!(key.len(), 64);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn consent_event_key_allows_empty_sub_level() {
        let key = consent_event_key("abc123", "2022-01-05T10:00:00", "Opt_in", "BR001", "");

        assert_eq!(key.len(), 64);
    }
}
