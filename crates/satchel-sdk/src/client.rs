use std::sync::Arc;

use satchel_codec::SpaceCodec;
use satchel_registry::{InMemorySpaceRegistry, SpaceRegistry};
use satchel_store::{Codec, ConversionContext, InMemoryTagStore, OwnerId, TagStore};
use satchel_types::KeySpace;

use crate::error::SdkResult;

/// High-level Satchel instance.
///
/// Bundles an in-memory tag store, an in-memory space registry, and the key
/// space application tags are derived in. Typed access goes through a codec:
/// the codec converts the value to a primitive, and the store writes the
/// primitive into the owner's root container under the derived key.
pub struct Satchel {
    space: KeySpace,
    store: InMemoryTagStore,
    registry: Arc<InMemorySpaceRegistry>,
}

impl Satchel {
    /// Create an instance deriving tag keys in the default key space.
    pub fn new() -> Self {
        Self::with_space(KeySpace::default())
    }

    /// Create an instance deriving tag keys in the given key space.
    pub fn with_space(space: KeySpace) -> Self {
        Self {
            space,
            store: InMemoryTagStore::new(),
            registry: Arc::new(InMemorySpaceRegistry::new()),
        }
    }

    /// The key space tag keys are derived in.
    pub fn space(&self) -> &KeySpace {
        &self.space
    }

    /// The underlying tag store.
    pub fn store(&self) -> &InMemoryTagStore {
        &self.store
    }

    /// The space registry backing [`space_codec`](Self::space_codec).
    pub fn registry(&self) -> &Arc<InMemorySpaceRegistry> {
        &self.registry
    }

    /// A codec for references to spaces mounted in this instance's registry.
    pub fn space_codec(&self) -> SpaceCodec {
        let registry: Arc<dyn SpaceRegistry> = self.registry.clone();
        SpaceCodec::new(registry)
    }

    // ---- Tag operations ----

    /// Encode `value` with `codec` and store it on `owner` under the tag
    /// key derived from `suffix`, overwriting any existing tag.
    pub fn set_tag<C: Codec>(
        &self,
        owner: &OwnerId,
        suffix: &str,
        codec: &C,
        value: &C::Complex,
    ) -> SdkResult<()> {
        let mut root = self.store.load(owner)?.unwrap_or_else(|| self.store.new_container());
        root.set(self.space.key(suffix), codec, value, &self.store);
        self.store.save(owner, &root)?;
        Ok(())
    }

    /// Load the tag stored on `owner` under `suffix` and decode it with
    /// `codec`.
    ///
    /// Returns `Ok(None)` if the owner has no container or the tag was
    /// never set.
    pub fn get_tag<C: Codec>(
        &self,
        owner: &OwnerId,
        suffix: &str,
        codec: &C,
    ) -> SdkResult<Option<C::Complex>> {
        let Some(root) = self.store.load(owner)? else {
            return Ok(None);
        };
        let value = root.get(&self.space.key(suffix), codec, &self.store)?;
        Ok(value)
    }

    /// Remove the tag stored on `owner` under `suffix`. Returns `true` if a
    /// tag was removed.
    pub fn remove_tag(&self, owner: &OwnerId, suffix: &str) -> SdkResult<bool> {
        let Some(mut root) = self.store.load(owner)? else {
            return Ok(false);
        };
        let removed = root.remove(&self.space.key(suffix)).is_some();
        if removed {
            self.store.save(owner, &root)?;
        }
        Ok(removed)
    }
}

impl Default for Satchel {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Satchel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Satchel")
            .field("space", &self.space)
            .field("store", &self.store)
            .field("registry", &self.registry)
            .finish()
    }
}
