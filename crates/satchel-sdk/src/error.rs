use thiserror::Error;

use satchel_store::{DecodeError, StoreError};

/// Errors surfaced by the high-level API.
#[derive(Debug, Error)]
pub enum SdkError {
    /// A persisted value could not be reconstructed.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The underlying store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result alias for high-level operations.
pub type SdkResult<T> = std::result::Result<T, SdkError>;
