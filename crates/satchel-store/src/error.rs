use satchel_types::KeyError;
use thiserror::Error;

use crate::primitive::PrimitiveKind;

/// Errors from decoding a primitive back into a complex value.
///
/// Every variant signals a data-integrity problem: the persisted primitive
/// does not represent a valid encoding for the requested complex type.
/// Callers should treat any of these as "this persisted value cannot be
/// reconstructed" — there is no retry or partial recovery.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A composite container lacks the reserved size slot. Signals foreign
    /// or corrupted data.
    #[error("missing size marker in {what} container")]
    MissingSizeMarker { what: &'static str },

    /// The size marker is present but negative.
    #[error("invalid size marker: {size}")]
    InvalidSize { size: i64 },

    /// A map container's size marker promises an entry whose key or value
    /// slot was never written.
    #[error("missing {what} slot at entry {index}")]
    MissingSlot { what: &'static str, index: usize },

    /// The stored primitive is of a different kind than the codec expects.
    #[error("expected {expected} primitive, got {actual}")]
    WrongKind {
        expected: PrimitiveKind,
        actual: PrimitiveKind,
    },

    /// A byte sequence has the wrong length for its complex type.
    #[error("invalid byte length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// A character codec was given an empty string.
    #[error("empty text for character value")]
    EmptyText,

    /// A name was not recognized by the corresponding namespace.
    #[error("unknown {kind} name: {name}")]
    UnknownName { kind: &'static str, name: String },

    /// A keyed-entity codec was given unparseable key text.
    #[error("malformed entity key: {0}")]
    MalformedKey(#[from] KeyError),

    /// A named space reference points at a space that is not currently
    /// mounted.
    #[error("space is not mounted: {name}")]
    SpaceNotMounted { name: String },
}

/// Result alias for decode operations.
pub type DecodeResult<T> = std::result::Result<T, DecodeError>;

/// Errors from root-container store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization or deserialization failure in a persistent backend.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
