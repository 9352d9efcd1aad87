//! In-memory space registry for testing and embedded use.
//!
//! [`InMemorySpaceRegistry`] keeps all mounted spaces in a `HashMap` behind a
//! `RwLock`. It implements the full [`SpaceRegistry`] trait and is suitable
//! for unit tests and single-process embedding.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::error::{RegistryError, Result};
use crate::space::{validate_space_name, Space};
use crate::traits::SpaceRegistry;

/// An in-memory implementation of [`SpaceRegistry`].
///
/// All data lives in a `HashMap` behind a `RwLock`. Mounts are lost when the
/// registry is dropped.
pub struct InMemorySpaceRegistry {
    spaces: RwLock<HashMap<String, Arc<Space>>>,
}

impl InMemorySpaceRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            spaces: RwLock::new(HashMap::new()),
        }
    }

    /// Number of currently-mounted spaces.
    pub fn len(&self) -> usize {
        self.spaces.read().expect("lock poisoned").len()
    }

    /// Returns `true` if no spaces are mounted.
    pub fn is_empty(&self) -> bool {
        self.spaces.read().expect("lock poisoned").is_empty()
    }
}

impl Default for InMemorySpaceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SpaceRegistry for InMemorySpaceRegistry {
    fn resolve(&self, name: &str) -> Option<Arc<Space>> {
        let spaces = self.spaces.read().expect("lock poisoned");
        spaces.get(name).cloned()
    }

    fn mount(&self, name: &str) -> Result<Arc<Space>> {
        validate_space_name(name)?;
        let mut spaces = self.spaces.write().expect("lock poisoned");
        if spaces.contains_key(name) {
            return Err(RegistryError::AlreadyMounted {
                name: name.to_string(),
            });
        }
        let space = Arc::new(Space::new(name));
        spaces.insert(name.to_string(), Arc::clone(&space));
        debug!(space = %name, id = %space.id(), "mounted space");
        Ok(space)
    }

    fn unmount(&self, name: &str) -> Result<bool> {
        let mut spaces = self.spaces.write().expect("lock poisoned");
        let removed = spaces.remove(name).is_some();
        if removed {
            debug!(space = %name, "unmounted space");
        }
        Ok(removed)
    }

    fn list(&self) -> Vec<Arc<Space>> {
        let spaces = self.spaces.read().expect("lock poisoned");
        let mut all: Vec<Arc<Space>> = spaces.values().cloned().collect();
        all.sort_by(|a, b| a.name().cmp(b.name()));
        all
    }
}

impl std::fmt::Debug for InMemorySpaceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemorySpaceRegistry")
            .field("mounted", &self.len())
            .finish()
    }
}
