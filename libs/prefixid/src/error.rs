//! Error types for prefixed-ID formatting and parsing.

use thiserror::Error;

/// Errors that can occur when formatting or parsing prefixed IDs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PrefixError {
    /// No prefix is registered for the entity type.
    #[error("no prefix registered for entity type: {0}")]
    UnregisteredEntityType(String),

    /// A prefix is registered for the entity type but no strategy is bound.
    ///
    /// Only reachable through [`Registry::with_prefixes`], which seeds
    /// prefixes without strategies.
    ///
    /// [`Registry::with_prefixes`]: crate::Registry::with_prefixes
    #[error("no strategy bound for entity type: {0}")]
    UnboundStrategy(String),

    /// The prefixed ID does not start with the prefix registered for the
    /// entity type, followed by an underscore.
    #[error("invalid prefix format for entity type: {entity_type}")]
    PrefixMismatch { entity_type: String },

    /// The raw portion of the ID is not a valid signed decimal integer.
    #[error("invalid integer ID: {0}")]
    InvalidInt(String),

    /// The raw portion of the ID is not a valid UUID.
    #[error("invalid UUID: {0}")]
    InvalidUuid(String),

    /// The raw portion of the ID is not a valid ULID.
    #[error("invalid ULID: {0}")]
    InvalidUlid(String),

    /// The raw portion of the ID is not a valid KSUID.
    #[error("invalid KSUID: {0}")]
    InvalidKsuid(String),
}

impl PrefixError {
    /// Returns true if this error indicates a registry lookup failure rather
    /// than malformed input.
    pub fn is_not_registered(&self) -> bool {
        matches!(
            self,
            PrefixError::UnregisteredEntityType(_) | PrefixError::UnboundStrategy(_)
        )
    }

    /// Returns true if this error indicates the raw string was not a valid
    /// encoding of the identifier type.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            PrefixError::InvalidInt(_)
                | PrefixError::InvalidUuid(_)
                | PrefixError::InvalidUlid(_)
                | PrefixError::InvalidKsuid(_)
        )
    }
}
