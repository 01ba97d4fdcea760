//! Error types for document store operations.

use thiserror::Error;
use uuid::Uuid;

/// Result type for document store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors returned by document store implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A document with the same identifier already exists.
    #[error("duplicate document identifier: {0}")]
    DuplicateDocument(Uuid),

    /// The document was not found.
    #[error("document not found: {0}")]
    NotFound(Uuid),

    /// The collection lock was poisoned by a panicking writer.
    #[error("collection state is no longer accessible")]
    LockPoisoned,
}

/// Errors returned while decoding a raw document into a domain entity.
///
/// Decoding is schema-on-read: absent optional fields take deterministic
/// defaults, while fields that are present but malformed fail loudly with
/// one of these variants.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// A required field is absent.
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    /// A field is present but holds an unusable value.
    #[error("invalid value in field '{field}': {reason}")]
    InvalidField {
        /// Name of the offending body field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl DecodeError {
    /// Builds an [`DecodeError::InvalidField`] from a field name and reason.
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}
