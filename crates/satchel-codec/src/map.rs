//! Composite codec for maps.
//!
//! A map encodes to a nested container holding a size marker and one
//! `key-<i>` / `value-<i>` slot pair per present entry. Entries whose value
//! is `None` are skipped entirely — neither slot is written and the entry
//! index does not advance — so the size marker always equals the number of
//! slot pairs actually present. Decode therefore never probes an absent
//! pair: a missing slot below the marker is corruption, not a hole.
//!
//! Keys cannot be null; the complex type is `BTreeMap<K, Option<V>>`, which
//! makes a null key unrepresentable and gives entries a deterministic
//! iteration order.

use std::collections::BTreeMap;

use satchel_store::{Codec, Container, ConversionContext, DecodeError, DecodeResult};
use satchel_types::KeySpace;

use crate::layout;
use crate::raw;

/// Composite codec for maps, parameterized by a key codec and a value codec.
#[derive(Clone, Debug)]
pub struct MapCodec<K, V> {
    key: K,
    value: V,
    space: KeySpace,
}

impl<K, V> MapCodec<K, V>
where
    K: Codec,
    V: Codec,
    K::Complex: Ord,
{
    /// Create a map codec over the given key and value codecs, deriving
    /// reserved slots in the default key space.
    pub fn new(key: K, value: V) -> Self {
        Self::in_space(KeySpace::default(), key, value)
    }

    /// Create a map codec deriving reserved slots in `space`.
    pub fn in_space(space: KeySpace, key: K, value: V) -> Self {
        Self { key, value, space }
    }
}

impl<K, V> Codec for MapCodec<K, V>
where
    K: Codec,
    V: Codec,
    K::Complex: Ord,
{
    type Primitive = Container;
    type Complex = BTreeMap<K::Complex, Option<V::Complex>>;

    fn encode(&self, value: &Self::Complex, ctx: &dyn ConversionContext) -> Container {
        let mut container = ctx.new_container();
        // The entry index advances only for entries actually written, so it
        // is decoupled from the iteration position.
        let mut written: usize = 0;
        for (entry_key, entry_value) in value {
            let Some(entry_value) = entry_value else {
                continue;
            };
            container.set(
                layout::entry_key_key(&self.space, written),
                &self.key,
                entry_key,
                ctx,
            );
            container.set(
                layout::entry_value_key(&self.space, written),
                &self.value,
                entry_value,
                ctx,
            );
            written += 1;
        }
        // Written last: the marker must equal the final count of present
        // slot pairs, not the input map's entry count.
        container.set(
            layout::size_key(&self.space),
            &raw::INT,
            &(written as i64),
            ctx,
        );
        container
    }

    fn decode(
        &self,
        primitive: &Container,
        ctx: &dyn ConversionContext,
    ) -> DecodeResult<Self::Complex> {
        let len = layout::read_size(primitive, &self.space, "map", ctx)?;
        let mut result = BTreeMap::new();
        for index in 0..len {
            let entry_key = primitive
                .get(&layout::entry_key_key(&self.space, index), &self.key, ctx)?
                .ok_or(DecodeError::MissingSlot {
                    what: "key",
                    index,
                })?;
            let entry_value = primitive
                .get(
                    &layout::entry_value_key(&self.space, index),
                    &self.value,
                    ctx,
                )?
                .ok_or(DecodeError::MissingSlot {
                    what: "value",
                    index,
                })?;
            // Last-write-wins on key collision; a correct encoder never
            // produces one.
            result.insert(entry_key, Some(entry_value));
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::STRING;
    use crate::scalar::UUID;
    use crate::seq::ListCodec;
    use satchel_store::{BasicContext, Primitive};
    use uuid::Uuid;

    fn space() -> KeySpace {
        KeySpace::default()
    }

    fn id(n: u128) -> Uuid {
        Uuid::from_u128(n)
    }

    fn string_uuid_map() -> MapCodec<crate::raw::RawCodec<String>, crate::scalar::UuidCodec> {
        MapCodec::new(STRING, UUID)
    }

    // -----------------------------------------------------------------------
    // Round-trips
    // -----------------------------------------------------------------------

    #[test]
    fn map_roundtrip_dense() {
        let codec = string_uuid_map();
        let mut map = BTreeMap::new();
        map.insert("x".to_string(), Some(id(1)));
        map.insert("y".to_string(), Some(id(2)));

        let container = codec.encode(&map, &BasicContext);
        assert_eq!(codec.decode(&container, &BasicContext).unwrap(), map);
    }

    #[test]
    fn map_roundtrip_empty() {
        let codec = string_uuid_map();
        let map = BTreeMap::new();
        let container = codec.encode(&map, &BasicContext);
        assert_eq!(
            container.get_raw(&layout::size_key(&space())),
            Some(&Primitive::Int(0))
        );
        assert_eq!(codec.decode(&container, &BasicContext).unwrap(), map);
    }

    #[test]
    fn null_valued_entries_are_dropped() {
        let codec = string_uuid_map();
        let mut map = BTreeMap::new();
        map.insert("keep".to_string(), Some(id(1)));
        map.insert("drop".to_string(), None);
        map.insert("also-keep".to_string(), Some(id(2)));

        let decoded = codec
            .decode(&codec.encode(&map, &BasicContext), &BasicContext)
            .unwrap();

        let mut expected = BTreeMap::new();
        expected.insert("keep".to_string(), Some(id(1)));
        expected.insert("also-keep".to_string(), Some(id(2)));
        assert_eq!(decoded, expected);
    }

    // -----------------------------------------------------------------------
    // Container layout
    // -----------------------------------------------------------------------

    #[test]
    fn size_marker_counts_written_entries_only() {
        let (a, c) = (id(0xa), id(0xc));
        let codec = string_uuid_map();
        // BTreeMap iterates x, y, z.
        let mut map = BTreeMap::new();
        map.insert("x".to_string(), Some(a));
        map.insert("y".to_string(), None);
        map.insert("z".to_string(), Some(c));

        let container = codec.encode(&map, &BasicContext);

        // Marker = 2, not the input's 3 entries.
        assert_eq!(
            container.get_raw(&layout::size_key(&space())),
            Some(&Primitive::Int(2))
        );
        // The skipped entry leaves no gap in the pair numbering.
        assert_eq!(
            container.get_raw(&layout::entry_key_key(&space(), 0)),
            Some(&Primitive::Str("x".to_string()))
        );
        assert_eq!(
            container.get_raw(&layout::entry_value_key(&space(), 0)),
            Some(&Primitive::Bytes(UUID.encode(&a, &BasicContext)))
        );
        assert_eq!(
            container.get_raw(&layout::entry_key_key(&space(), 1)),
            Some(&Primitive::Str("z".to_string()))
        );
        assert_eq!(
            container.get_raw(&layout::entry_value_key(&space(), 1)),
            Some(&Primitive::Bytes(UUID.encode(&c, &BasicContext)))
        );
        assert!(!container.contains(&layout::entry_key_key(&space(), 2)));
        assert_eq!(container.len(), 5); // size + two pairs
    }

    #[test]
    fn all_null_values_encode_like_empty_map() {
        let codec = string_uuid_map();
        let mut map = BTreeMap::new();
        map.insert("a".to_string(), None);
        map.insert("b".to_string(), None);

        let container = codec.encode(&map, &BasicContext);
        assert_eq!(
            container.get_raw(&layout::size_key(&space())),
            Some(&Primitive::Int(0))
        );
        assert_eq!(container.len(), 1);
        assert!(codec.decode(&container, &BasicContext).unwrap().is_empty());
    }

    // -----------------------------------------------------------------------
    // Malformed containers
    // -----------------------------------------------------------------------

    #[test]
    fn missing_size_marker_fails() {
        let codec = string_uuid_map();
        let mut map = BTreeMap::new();
        map.insert("x".to_string(), Some(id(1)));
        let mut container = codec.encode(&map, &BasicContext);
        container.remove(&layout::size_key(&space()));

        let err = codec.decode(&container, &BasicContext).unwrap_err();
        assert_eq!(err, DecodeError::MissingSizeMarker { what: "map" });
    }

    #[test]
    fn marker_promising_missing_pair_fails() {
        let codec = string_uuid_map();
        let mut container = Container::new();
        container.set_raw(layout::size_key(&space()), Primitive::Int(1));

        let err = codec.decode(&container, &BasicContext).unwrap_err();
        assert_eq!(
            err,
            DecodeError::MissingSlot {
                what: "key",
                index: 0,
            }
        );
    }

    #[test]
    fn missing_value_slot_fails() {
        let codec = string_uuid_map();
        let mut container = Container::new();
        container.set_raw(layout::size_key(&space()), Primitive::Int(1));
        container.set_raw(layout::entry_key_key(&space(), 0), Primitive::Str("x".into()));

        let err = codec.decode(&container, &BasicContext).unwrap_err();
        assert_eq!(
            err,
            DecodeError::MissingSlot {
                what: "value",
                index: 0,
            }
        );
    }

    #[test]
    fn inner_codec_error_propagates_unchanged() {
        let codec = string_uuid_map();
        let mut container = Container::new();
        container.set_raw(layout::size_key(&space()), Primitive::Int(1));
        container.set_raw(layout::entry_key_key(&space(), 0), Primitive::Str("x".into()));
        container.set_raw(
            layout::entry_value_key(&space(), 0),
            Primitive::Bytes(vec![0u8; 3]),
        );

        let err = codec.decode(&container, &BasicContext).unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidLength {
                expected: 16,
                actual: 3,
            }
        );
    }

    // -----------------------------------------------------------------------
    // Nesting
    // -----------------------------------------------------------------------

    #[test]
    fn map_of_lists_of_identifiers() {
        let codec = MapCodec::new(STRING, ListCodec::new(UUID));

        let mut map: BTreeMap<String, Option<Vec<Option<Uuid>>>> = BTreeMap::new();
        map.insert("dense".to_string(), Some(vec![Some(id(1)), Some(id(2))]));
        map.insert("empty".to_string(), Some(Vec::new()));
        map.insert("one-hole".to_string(), Some(vec![None]));
        map.insert("absent".to_string(), None);

        let container = codec.encode(&map, &BasicContext);
        let decoded = codec.decode(&container, &BasicContext).unwrap();

        let mut expected = map;
        expected.remove("absent");
        assert_eq!(decoded, expected);
    }

    #[test]
    fn deep_nesting_roundtrip() {
        // list<map<string, uuid>>
        let codec = ListCodec::new(MapCodec::new(STRING, UUID));

        let mut inner = BTreeMap::new();
        inner.insert("k".to_string(), Some(id(9)));

        let values = vec![Some(inner.clone()), None, Some(BTreeMap::new())];
        let container = codec.encode(&values, &BasicContext);
        let decoded = codec.decode(&container, &BasicContext).unwrap();
        assert_eq!(decoded, values);
    }
}
