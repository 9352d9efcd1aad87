use std::fmt;

use serde::{Deserialize, Serialize};

use crate::codec::ConversionContext;
use crate::container::Container;
use crate::error::StoreResult;

/// Unique identifier for a container owner (UUID v7 for time-ordering).
///
/// Owners are the entities tags are attached to: a record, a session, a
/// device — whatever the embedding application hangs containers off.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OwnerId(uuid::Uuid);

impl OwnerId {
    /// Generate a new time-ordered owner ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7())
    }

    /// Create from an existing UUID.
    pub fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }

    /// Short representation (first 8 characters of the UUID).
    pub fn short_id(&self) -> String {
        self.0.to_string()[..8].to_string()
    }
}

impl Default for OwnerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OwnerId({})", self.short_id())
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Root-container store: one container per owner.
///
/// All implementations must satisfy these invariants:
/// - A save replaces the owner's previous root container wholesale.
/// - Loads return a snapshot; mutating it does not affect the store until
///   it is saved back.
/// - Concurrent loads are always safe.
/// - All I/O errors are propagated, never silently ignored.
///
/// Every store is also a [`ConversionContext`], so callers can pass the
/// store itself as the ambient context when encoding values destined for it.
pub trait TagStore: ConversionContext + Send + Sync {
    /// Load the root container attached to an owner.
    ///
    /// Returns `Ok(None)` if the owner has no container.
    fn load(&self, owner: &OwnerId) -> StoreResult<Option<Container>>;

    /// Attach a root container to an owner, replacing any existing one.
    fn save(&self, owner: &OwnerId, container: &Container) -> StoreResult<()>;

    /// Detach the root container from an owner. Returns `true` if one was
    /// attached.
    fn remove(&self, owner: &OwnerId) -> StoreResult<bool>;

    /// Check whether an owner has a container attached.
    ///
    /// Default implementation loads the container. Backends may override to
    /// avoid the copy.
    fn exists(&self, owner: &OwnerId) -> StoreResult<bool> {
        Ok(self.load(owner)?.is_some())
    }
}
