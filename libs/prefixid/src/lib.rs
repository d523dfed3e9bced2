//! # prefixid
//!
//! Prefixed-identifier formatting and parsing with a concurrent entity-type
//! registry.
//!
//! ## ID Format
//!
//! A prefixed identifier is a string of the exact shape `{prefix}_{encoded-id}`,
//! where the encoding is the canonical textual form of the identifier value:
//!
//! - `usr_abc123` (string ID)
//! - `prd_42` (integer ID)
//! - `ord_f47ac10b-58cc-4372-a567-0e02b2c3d479` (UUID)
//! - `ses_01HV4Z2WQXKJNM8GPQY6VBKC3D` (ULID)
//! - `txn_0ujtsYcgvSTl8PAuAdqWYSMnLOv` (KSUID)
//!
//! The separator is a single literal underscore. Underscores inside a prefix
//! or an encoded identifier are not escaped, so overlapping prefixes can make
//! [`Registry::match_prefix`] ambiguous; this is an accepted format
//! limitation, not something the library resolves.
//!
//! ## Usage
//!
//! Register `(entity type, prefix, strategy)` triples once at startup, then
//! format and parse from any thread:
//!
//! ```
//! use prefixid::{Registry, StringStrategy};
//!
//! let registry = Registry::new();
//! registry.register("user", "usr", StringStrategy);
//!
//! let prefixed = registry.prefix_id("user", &"abc123".to_string())?;
//! assert_eq!(prefixed, "usr_abc123");
//!
//! let id = registry.parse_prefixed_id("user", "usr_abc123")?;
//! assert_eq!(id, "abc123");
//! # Ok::<(), prefixid::PrefixError>(())
//! ```
//!
//! A registry holds identifiers of a single value type. Use one registry per
//! type when an application mixes representations:
//!
//! ```
//! use prefixid::{IntStrategy, Registry, UuidStrategy};
//! use prefixid::Uuid;
//!
//! let products = Registry::new();
//! products.register("product", "prd", IntStrategy);
//! assert_eq!(products.prefix_id("product", &42)?, "prd_42");
//!
//! let orders = Registry::new();
//! orders.register("order", "ord", UuidStrategy);
//! let order_id = Uuid::parse_str("f47ac10b-58cc-4372-a567-0e02b2c3d479").unwrap();
//! assert_eq!(
//!     orders.prefix_id("order", &order_id)?,
//!     "ord_f47ac10b-58cc-4372-a567-0e02b2c3d479"
//! );
//! # Ok::<(), prefixid::PrefixError>(())
//! ```
//!
//! Prefixes can also be seeded up front and strategies bound later; formatting
//! fails with [`PrefixError::UnboundStrategy`] until the strategy arrives:
//!
//! ```
//! use std::collections::HashMap;
//! use prefixid::{PrefixError, Registry, StringStrategy};
//!
//! let mut prefixes = HashMap::new();
//! prefixes.insert("user".to_string(), "usr".to_string());
//!
//! let registry: Registry<String> = Registry::with_prefixes(prefixes);
//! let err = registry.prefix_id("user", &"abc".to_string()).unwrap_err();
//! assert_eq!(err, PrefixError::UnboundStrategy("user".to_string()));
//!
//! registry.register("user", "usr", StringStrategy);
//! assert_eq!(registry.prefix_id("user", &"abc".to_string())?, "usr_abc");
//! # Ok::<(), prefixid::PrefixError>(())
//! ```

mod error;
mod registry;
mod strategy;

pub use error::PrefixError;
pub use registry::Registry;
pub use strategy::{
    IdStrategy, IntStrategy, KsuidStrategy, StringStrategy, UlidStrategy, UuidStrategy,
};

/// Re-export of the identifier value types the built-in strategies handle,
/// for consumers that need raw UUID/ULID/KSUID operations.
pub use svix_ksuid::Ksuid;
pub use ulid::Ulid;
pub use uuid::Uuid;
