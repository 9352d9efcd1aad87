use thiserror::Error;

/// Errors produced by key parsing and validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// The namespace component is invalid.
    #[error("invalid namespace {namespace:?}: {reason}")]
    InvalidNamespace { namespace: String, reason: String },

    /// The name component is invalid.
    #[error("invalid slot name {name:?}: {reason}")]
    InvalidName { name: String, reason: String },

    /// The textual form cannot be split into a namespace and a name.
    #[error("malformed slot key {text:?}: {reason}")]
    Malformed { text: String, reason: String },
}

/// Convenience type alias for key operations.
pub type Result<T> = std::result::Result<T, KeyError>;
