//! Codec for live named space references.

use std::sync::Arc;

use satchel_registry::{Space, SpaceRegistry};
use satchel_store::{Codec, ConversionContext, DecodeError, DecodeResult};

/// Codec for references to mounted spaces, stored by name.
///
/// Encoding persists only the space's name; decoding resolves that name
/// against the registry the codec was built with. A space reference is the
/// one codec whose round-trip goes through external resolution: the decoded
/// value is whatever live instance is mounted under the name at decode time,
/// and decoding fails while no such space is mounted.
pub struct SpaceCodec {
    registry: Arc<dyn SpaceRegistry>,
}

impl SpaceCodec {
    /// Create a codec resolving against the given registry.
    pub fn new(registry: Arc<dyn SpaceRegistry>) -> Self {
        Self { registry }
    }
}

impl std::fmt::Debug for SpaceCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpaceCodec").finish_non_exhaustive()
    }
}

impl Codec for SpaceCodec {
    type Primitive = String;
    type Complex = Arc<Space>;

    fn encode(&self, value: &Arc<Space>, _ctx: &dyn ConversionContext) -> String {
        value.name().to_string()
    }

    fn decode(&self, primitive: &String, _ctx: &dyn ConversionContext) -> DecodeResult<Arc<Space>> {
        self.registry
            .resolve(primitive)
            .ok_or_else(|| DecodeError::SpaceNotMounted {
                name: primitive.clone(),
            })
    }
}
