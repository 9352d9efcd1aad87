//! Error types for registry operations.

use thiserror::Error;

/// Errors that can occur during space registry operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A space with this name is already mounted.
    #[error("space already mounted: {name}")]
    AlreadyMounted { name: String },

    /// No space with this name is currently mounted.
    #[error("space is not mounted: {name}")]
    NotMounted { name: String },

    /// The space name is invalid.
    #[error("invalid space name {name:?}: {reason}")]
    InvalidName { name: String, reason: String },
}

/// Convenience type alias for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
