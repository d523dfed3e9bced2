//! Identifier strategies: attach, detach, and parse for one value type each.
//!
//! A strategy is a small stateless unit that knows the canonical textual
//! encoding of exactly one identifier type. Attaching and detaching a prefix
//! is the same string operation for every strategy; only `encode` and `parse`
//! differ per type.

use svix_ksuid::Ksuid;
use ulid::Ulid;
use uuid::Uuid;

use crate::error::PrefixError;

/// Formatting and parsing of prefixed IDs for a single identifier type `T`.
///
/// `attach`/`detach` are symmetric for well-formed inputs:
/// `detach(p, &attach(p, id)) == Some(encode(id))` for every prefix `p`
/// (the empty string included) and every value `id`.
pub trait IdStrategy<T>: Send + Sync {
    /// Returns the canonical string encoding of `id`. Total; never fails for
    /// a well-formed value of `T`.
    fn encode(&self, id: &T) -> String;

    /// Decodes `raw` into a value of `T`, failing when `raw` is not a valid
    /// encoding.
    fn parse(&self, raw: &str) -> Result<T, PrefixError>;

    /// Builds the prefixed ID string `{prefix}_{encode(id)}`.
    fn attach(&self, prefix: &str, id: &T) -> String {
        format!("{}_{}", prefix, self.encode(id))
    }

    /// Strips `{prefix}_` from the front of `prefixed_id`, returning the
    /// remainder, or `None` when `prefixed_id` does not start with exactly
    /// that sequence. An empty prefix expects just a leading underscore.
    fn detach<'a>(&self, prefix: &str, prefixed_id: &'a str) -> Option<&'a str> {
        prefixed_id.strip_prefix(prefix)?.strip_prefix('_')
    }
}

/// Strategy for arbitrary string IDs. Encoding is the identity; parsing never
/// fails, the empty string included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringStrategy;

impl IdStrategy<String> for StringStrategy {
    fn encode(&self, id: &String) -> String {
        id.clone()
    }

    fn parse(&self, raw: &str) -> Result<String, PrefixError> {
        Ok(raw.to_string())
    }
}

/// Strategy for signed integer IDs, encoded as base-10 decimal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntStrategy;

impl IdStrategy<i64> for IntStrategy {
    fn encode(&self, id: &i64) -> String {
        id.to_string()
    }

    fn parse(&self, raw: &str) -> Result<i64, PrefixError> {
        raw.parse::<i64>()
            .map_err(|e| PrefixError::InvalidInt(e.to_string()))
    }
}

/// Strategy for UUID IDs, encoded in the canonical hyphenated lowercase form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UuidStrategy;

impl IdStrategy<Uuid> for UuidStrategy {
    fn encode(&self, id: &Uuid) -> String {
        id.to_string()
    }

    fn parse(&self, raw: &str) -> Result<Uuid, PrefixError> {
        Uuid::parse_str(raw).map_err(|e| PrefixError::InvalidUuid(e.to_string()))
    }
}

/// Strategy for ULID IDs, encoded as 26-char Crockford base32.
///
/// Encoding always emits uppercase; decoding accepts lowercase input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UlidStrategy;

impl IdStrategy<Ulid> for UlidStrategy {
    fn encode(&self, id: &Ulid) -> String {
        id.to_string()
    }

    fn parse(&self, raw: &str) -> Result<Ulid, PrefixError> {
        Ulid::from_string(raw).map_err(|e| PrefixError::InvalidUlid(e.to_string()))
    }
}

/// Strategy for KSUID IDs, encoded as 27-char base62.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KsuidStrategy;

impl IdStrategy<Ksuid> for KsuidStrategy {
    fn encode(&self, id: &Ksuid) -> String {
        id.to_string()
    }

    fn parse(&self, raw: &str) -> Result<Ksuid, PrefixError> {
        raw.parse::<Ksuid>()
            .map_err(|e| PrefixError::InvalidKsuid(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const UUID_STR: &str = "f47ac10b-58cc-4372-a567-0e02b2c3d479";
    const ULID_STR: &str = "01ARZ3NDEKTSV4RRFFQ69G5FAV";
    const KSUID_STR: &str = "0ujtsYcgvSTl8PAuAdqWYSMnLOv";

    #[test]
    fn test_string_round_trip() {
        let id = "abc123".to_string();
        let prefixed = StringStrategy.attach("usr", &id);
        assert_eq!(prefixed, "usr_abc123");

        let raw = StringStrategy.detach("usr", &prefixed).unwrap();
        assert_eq!(raw, "abc123");
        assert_eq!(StringStrategy.parse(raw).unwrap(), id);
    }

    #[test]
    fn test_string_parse_empty() {
        assert_eq!(StringStrategy.parse("").unwrap(), "");
    }

    #[test]
    fn test_int_round_trip() {
        let prefixed = IntStrategy.attach("prd", &42);
        assert_eq!(prefixed, "prd_42");

        let raw = IntStrategy.detach("prd", &prefixed).unwrap();
        assert_eq!(IntStrategy.parse(raw).unwrap(), 42);
    }

    #[test]
    fn test_int_negative_round_trip() {
        let prefixed = IntStrategy.attach("prd", &-7);
        assert_eq!(prefixed, "prd_-7");
        let raw = IntStrategy.detach("prd", &prefixed).unwrap();
        assert_eq!(IntStrategy.parse(raw).unwrap(), -7);
    }

    #[test]
    fn test_int_parse_failures() {
        for raw in ["abc", "", "123abc", "9223372036854775808"] {
            let err = IntStrategy.parse(raw).unwrap_err();
            assert!(
                matches!(err, PrefixError::InvalidInt(_)),
                "expected InvalidInt for {raw:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_uuid_round_trip() {
        let id = Uuid::parse_str(UUID_STR).unwrap();
        let prefixed = UuidStrategy.attach("ord", &id);
        assert_eq!(prefixed, format!("ord_{UUID_STR}"));

        let raw = UuidStrategy.detach("ord", &prefixed).unwrap();
        assert_eq!(UuidStrategy.parse(raw).unwrap(), id);
    }

    #[test]
    fn test_uuid_parse_failures() {
        for raw in ["", "not-a-uuid", "f47ac10b-58cc-4372-a567"] {
            let err = UuidStrategy.parse(raw).unwrap_err();
            assert!(matches!(err, PrefixError::InvalidUuid(_)));
        }
    }

    #[test]
    fn test_ulid_round_trip() {
        let id = Ulid::from_string(ULID_STR).unwrap();
        let prefixed = UlidStrategy.attach("ses", &id);
        assert_eq!(prefixed, format!("ses_{ULID_STR}"));

        let raw = UlidStrategy.detach("ses", &prefixed).unwrap();
        assert_eq!(UlidStrategy.parse(raw).unwrap(), id);
    }

    #[test]
    fn test_ulid_parse_lowercase() {
        let canonical = UlidStrategy.parse(ULID_STR).unwrap();
        let lowered = UlidStrategy.parse(&ULID_STR.to_lowercase()).unwrap();
        assert_eq!(canonical, lowered);
        // Encoding stays uppercase regardless of input case.
        assert_eq!(UlidStrategy.encode(&lowered), ULID_STR);
    }

    #[test]
    fn test_ulid_parse_failures() {
        for raw in ["", "not-a-ulid", "01ARZ3NDEKTSV4RRFFQ69G5FA"] {
            let err = UlidStrategy.parse(raw).unwrap_err();
            assert!(matches!(err, PrefixError::InvalidUlid(_)));
        }
    }

    #[test]
    fn test_ksuid_round_trip() {
        let id = KSUID_STR.parse::<Ksuid>().unwrap();
        let prefixed = KsuidStrategy.attach("txn", &id);
        assert_eq!(prefixed, format!("txn_{KSUID_STR}"));

        let raw = KsuidStrategy.detach("txn", &prefixed).unwrap();
        assert_eq!(KsuidStrategy.parse(raw).unwrap(), id);
    }

    #[test]
    fn test_ksuid_parse_failures() {
        for raw in ["", "not-a-ksuid", "0ujtsYcgvSTl8PAuAdqWYSMnLO"] {
            let err = KsuidStrategy.parse(raw).unwrap_err();
            assert!(matches!(err, PrefixError::InvalidKsuid(_)));
        }
    }

    #[test]
    fn test_detach_rejects_non_matching() {
        // Missing separator.
        assert_eq!(StringStrategy.detach("usr", "usr123"), None);
        // Wrong prefix.
        assert_eq!(StringStrategy.detach("usr", "invalid_123"), None);
        // Prefix that is a strict textual extension of the registered one.
        assert_eq!(StringStrategy.detach("usr", "usrx_123"), None);
    }

    #[test]
    fn test_detach_empty_prefix() {
        assert_eq!(StringStrategy.detach("", "_abc"), Some("abc"));
        assert_eq!(StringStrategy.detach("", "abc"), None);
    }

    proptest! {
        #[test]
        fn prop_string_round_trip(prefix in "[a-z_]{0,8}", id in ".*") {
            let prefixed = StringStrategy.attach(&prefix, &id);
            let raw = StringStrategy.detach(&prefix, &prefixed);
            prop_assert_eq!(raw, Some(id.as_str()));
        }

        #[test]
        fn prop_int_round_trip(prefix in "[a-z]{0,8}", id: i64) {
            let prefixed = IntStrategy.attach(&prefix, &id);
            let raw = IntStrategy.detach(&prefix, &prefixed).unwrap();
            prop_assert_eq!(IntStrategy.parse(raw).unwrap(), id);
        }

        #[test]
        fn prop_detach_only_splits_on_exact_prefix(prefix in "[a-z]{1,8}", s in ".*") {
            if let Some(raw) = StringStrategy.detach(&prefix, &s) {
                prop_assert_eq!(format!("{prefix}_{raw}"), s);
            } else {
                let with_sep = format!("{prefix}_");
                prop_assert!(!s.starts_with(&with_sep));
            }
        }
    }
}
