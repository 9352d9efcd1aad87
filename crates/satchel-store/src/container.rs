use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use satchel_types::SlotKey;

use crate::codec::{Codec, ConversionContext};
use crate::error::{DecodeError, DecodeResult};
use crate::primitive::{Primitive, PrimitiveValue};

/// An ordered, sparse mapping from slot keys to primitive values.
///
/// Containers are the nesting primitive: a container is itself storable
/// under a slot of another container, which is how composite codecs encode
/// arrays, lists, and maps to arbitrary depth. Each key maps to at most one
/// primitive, and the absence of a key is distinguishable from every value
/// that can be written.
///
/// A container created during an encode call is exclusively owned by the
/// codec that created it until handed back to the store; decode calls only
/// read from the container they are given.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    slots: BTreeMap<SlotKey, Primitive>,
}

impl Container {
    /// Create an empty container.
    pub fn new() -> Self {
        Self {
            slots: BTreeMap::new(),
        }
    }

    /// Number of written slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no slot has been written.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns `true` if a value was written under `key`.
    pub fn contains(&self, key: &SlotKey) -> bool {
        self.slots.contains_key(key)
    }

    /// The written slot keys, in order.
    pub fn keys(&self) -> impl Iterator<Item = &SlotKey> {
        self.slots.keys()
    }

    /// Write a primitive under a key, replacing any existing value.
    pub fn set_raw(&mut self, key: SlotKey, value: Primitive) {
        self.slots.insert(key, value);
    }

    /// Read the primitive written under a key, if any.
    pub fn get_raw(&self, key: &SlotKey) -> Option<&Primitive> {
        self.slots.get(key)
    }

    /// Remove the value under a key, returning it if one was written.
    pub fn remove(&mut self, key: &SlotKey) -> Option<Primitive> {
        self.slots.remove(key)
    }

    /// Encode a complex value with the given codec and write it under `key`,
    /// replacing any existing value.
    pub fn set<C: Codec>(
        &mut self,
        key: SlotKey,
        codec: &C,
        value: &C::Complex,
        ctx: &dyn ConversionContext,
    ) {
        let primitive = codec.encode(value, ctx).into_primitive();
        self.slots.insert(key, primitive);
    }

    /// Read the value under `key` and decode it with the given codec.
    ///
    /// Returns `Ok(None)` if the key was never written — absence is not an
    /// error. Fails with [`DecodeError::WrongKind`] if the written primitive
    /// is of a different kind than the codec expects, or with the codec's
    /// own error if the primitive is malformed.
    pub fn get<C: Codec>(
        &self,
        key: &SlotKey,
        codec: &C,
        ctx: &dyn ConversionContext,
    ) -> DecodeResult<Option<C::Complex>> {
        let Some(primitive) = self.slots.get(key) else {
            return Ok(None);
        };
        let view = C::Primitive::from_primitive(primitive).ok_or(DecodeError::WrongKind {
            expected: C::Primitive::KIND,
            actual: primitive.kind(),
        })?;
        codec.decode(view, ctx).map(Some)
    }
}
