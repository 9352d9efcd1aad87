//! In-memory, HashMap-based tag store.
//!
//! Intended for tests and embedding. All containers are held in memory
//! behind a `RwLock` and cloned on load/save.

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;

use crate::codec::ConversionContext;
use crate::container::Container;
use crate::error::StoreResult;
use crate::traits::{OwnerId, TagStore};

/// An in-memory implementation of [`TagStore`].
pub struct InMemoryTagStore {
    roots: RwLock<HashMap<OwnerId, Container>>,
}

impl InMemoryTagStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            roots: RwLock::new(HashMap::new()),
        }
    }

    /// Number of owners with a container attached.
    pub fn len(&self) -> usize {
        self.roots.read().expect("lock poisoned").len()
    }

    /// Returns `true` if no owner has a container attached.
    pub fn is_empty(&self) -> bool {
        self.roots.read().expect("lock poisoned").is_empty()
    }

    /// Detach all containers.
    pub fn clear(&self) {
        self.roots.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemoryTagStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversionContext for InMemoryTagStore {
    fn new_container(&self) -> Container {
        Container::new()
    }
}

impl TagStore for InMemoryTagStore {
    fn load(&self, owner: &OwnerId) -> StoreResult<Option<Container>> {
        let roots = self.roots.read().expect("lock poisoned");
        Ok(roots.get(owner).cloned())
    }

    fn save(&self, owner: &OwnerId, container: &Container) -> StoreResult<()> {
        let mut roots = self.roots.write().expect("lock poisoned");
        roots.insert(*owner, container.clone());
        debug!(owner = %owner, slots = container.len(), "saved root container");
        Ok(())
    }

    fn remove(&self, owner: &OwnerId) -> StoreResult<bool> {
        let mut roots = self.roots.write().expect("lock poisoned");
        let removed = roots.remove(owner).is_some();
        if removed {
            debug!(owner = %owner, "removed root container");
        }
        Ok(removed)
    }

    fn exists(&self, owner: &OwnerId) -> StoreResult<bool> {
        let roots = self.roots.read().expect("lock poisoned");
        Ok(roots.contains_key(owner))
    }
}

impl std::fmt::Debug for InMemoryTagStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryTagStore")
            .field("owner_count", &self.len())
            .finish()
    }
}
