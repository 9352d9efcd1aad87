//! Composite codecs for sequences: arrays and lists.
//!
//! Both encode to a nested container holding a size marker and one slot per
//! present element, keyed by the element's index. Null elements are encoded
//! sparsely: no slot is written at all, and decode restores the hole. The
//! two codecs share one container layout, so data written by either decodes
//! with the other; they differ only in the complex type handed back
//! (fixed-length slice vs. growable vector).

use satchel_store::{Codec, Container, ConversionContext, DecodeResult};
use satchel_types::KeySpace;

use crate::layout;
use crate::raw;

fn encode_sequence<C: Codec>(
    space: &KeySpace,
    element: &C,
    items: &[Option<C::Complex>],
    ctx: &dyn ConversionContext,
) -> Container {
    let mut container = ctx.new_container();
    container.set(layout::size_key(space), &raw::INT, &(items.len() as i64), ctx);
    for (index, item) in items.iter().enumerate() {
        let Some(item) = item else {
            // Sparse encoding: a hole writes no slot, not a placeholder.
            continue;
        };
        container.set(layout::index_key(space, index), element, item, ctx);
    }
    container
}

fn decode_sequence<C: Codec>(
    space: &KeySpace,
    element: &C,
    container: &Container,
    what: &'static str,
    ctx: &dyn ConversionContext,
) -> DecodeResult<Vec<Option<C::Complex>>> {
    let len = layout::read_size(container, space, what, ctx)?;
    let mut result = Vec::with_capacity(len);
    for index in 0..len {
        // An absent slot is a hole, not an error.
        result.push(container.get(&layout::index_key(space, index), element, ctx)?);
    }
    Ok(result)
}

/// Composite codec for fixed-length sequences.
///
/// The decoded value always has exactly the length recorded by the size
/// marker, with holes for absent slots.
#[derive(Clone, Debug)]
pub struct ArrayCodec<C> {
    element: C,
    space: KeySpace,
}

impl<C: Codec> ArrayCodec<C> {
    /// Create an array codec over the given element codec, deriving
    /// reserved slots in the default key space.
    pub fn new(element: C) -> Self {
        Self::in_space(KeySpace::default(), element)
    }

    /// Create an array codec deriving reserved slots in `space`.
    pub fn in_space(space: KeySpace, element: C) -> Self {
        Self { element, space }
    }
}

impl<C: Codec> Codec for ArrayCodec<C> {
    type Primitive = Container;
    type Complex = Box<[Option<C::Complex>]>;

    fn encode(&self, value: &Self::Complex, ctx: &dyn ConversionContext) -> Container {
        encode_sequence(&self.space, &self.element, value, ctx)
    }

    fn decode(
        &self,
        primitive: &Container,
        ctx: &dyn ConversionContext,
    ) -> DecodeResult<Self::Complex> {
        decode_sequence(&self.space, &self.element, primitive, "array", ctx)
            .map(Vec::into_boxed_slice)
    }
}

/// Composite codec for growable sequences.
#[derive(Clone, Debug)]
pub struct ListCodec<C> {
    element: C,
    space: KeySpace,
}

impl<C: Codec> ListCodec<C> {
    /// Create a list codec over the given element codec, deriving reserved
    /// slots in the default key space.
    pub fn new(element: C) -> Self {
        Self::in_space(KeySpace::default(), element)
    }

    /// Create a list codec deriving reserved slots in `space`.
    pub fn in_space(space: KeySpace, element: C) -> Self {
        Self { element, space }
    }
}

impl<C: Codec> Codec for ListCodec<C> {
    type Primitive = Container;
    type Complex = Vec<Option<C::Complex>>;

    fn encode(&self, value: &Self::Complex, ctx: &dyn ConversionContext) -> Container {
        encode_sequence(&self.space, &self.element, value, ctx)
    }

    fn decode(
        &self,
        primitive: &Container,
        ctx: &dyn ConversionContext,
    ) -> DecodeResult<Self::Complex> {
        decode_sequence(&self.space, &self.element, primitive, "list", ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::{CHARACTER, UUID};
    use proptest::prelude::*;
    use satchel_store::{BasicContext, DecodeError, Primitive};
    use uuid::Uuid;

    fn space() -> KeySpace {
        KeySpace::default()
    }

    fn id(n: u128) -> Uuid {
        Uuid::from_u128(n)
    }

    // -----------------------------------------------------------------------
    // List round-trips
    // -----------------------------------------------------------------------

    #[test]
    fn list_roundtrip_dense() {
        let codec = ListCodec::new(UUID);
        let values = vec![Some(id(1)), Some(id(2)), Some(id(3))];
        let container = codec.encode(&values, &BasicContext);
        assert_eq!(codec.decode(&container, &BasicContext).unwrap(), values);
    }

    #[test]
    fn list_roundtrip_empty() {
        let codec = ListCodec::new(UUID);
        let values: Vec<Option<Uuid>> = Vec::new();
        let container = codec.encode(&values, &BasicContext);
        assert_eq!(container.len(), 1); // only the size marker
        assert_eq!(codec.decode(&container, &BasicContext).unwrap(), values);
    }

    #[test]
    fn list_holes_roundtrip_as_holes() {
        let codec = ListCodec::new(UUID);
        // Holes at the first index, in the middle, and at the last index.
        let values = vec![None, Some(id(7)), None, Some(id(8)), None];
        let container = codec.encode(&values, &BasicContext);
        let decoded = codec.decode(&container, &BasicContext).unwrap();
        assert_eq!(decoded.len(), values.len());
        assert_eq!(decoded, values);
    }

    #[test]
    fn list_all_holes() {
        let codec = ListCodec::new(UUID);
        let values = vec![None, None, None];
        let container = codec.encode(&values, &BasicContext);
        assert_eq!(container.len(), 1); // size marker only, every slot skipped
        assert_eq!(codec.decode(&container, &BasicContext).unwrap(), values);
    }

    // -----------------------------------------------------------------------
    // Container layout
    // -----------------------------------------------------------------------

    #[test]
    fn list_layout_is_sparse() {
        let (a, c) = (id(0xa), id(0xc));
        let codec = ListCodec::new(UUID);
        let container = codec.encode(&vec![Some(a), None, Some(c)], &BasicContext);

        assert_eq!(
            container.get_raw(&layout::size_key(&space())),
            Some(&Primitive::Int(3))
        );
        assert!(container.contains(&layout::index_key(&space(), 0)));
        assert!(!container.contains(&layout::index_key(&space(), 1)));
        assert!(container.contains(&layout::index_key(&space(), 2)));
        assert_eq!(container.len(), 3); // size + two elements

        let decoded = codec.decode(&container, &BasicContext).unwrap();
        assert_eq!(decoded, vec![Some(a), None, Some(c)]);
    }

    #[test]
    fn list_and_array_share_one_layout() {
        let list = ListCodec::new(UUID);
        let array = ArrayCodec::new(UUID);
        let values = vec![Some(id(1)), None, Some(id(3))];

        let container = list.encode(&values, &BasicContext);
        let as_array = array.decode(&container, &BasicContext).unwrap();
        assert_eq!(as_array.as_ref(), values.as_slice());

        let container = array.encode(&values.clone().into_boxed_slice(), &BasicContext);
        let as_list = list.decode(&container, &BasicContext).unwrap();
        assert_eq!(as_list, values);
    }

    #[test]
    fn custom_key_space() {
        let ks = KeySpace::new("app").unwrap();
        let codec = ListCodec::in_space(ks.clone(), UUID);
        let container = codec.encode(&vec![Some(id(1))], &BasicContext);

        assert!(container.contains(&ks.key("size")));
        assert!(container.contains(&ks.key("0")));
        assert!(!container.contains(&KeySpace::default().key("size")));
    }

    // -----------------------------------------------------------------------
    // Array decode allocates exactly the marked length
    // -----------------------------------------------------------------------

    #[test]
    fn array_length_matches_marker() {
        let codec = ArrayCodec::new(UUID);
        let values: Box<[Option<Uuid>]> = vec![None, Some(id(5)), None].into_boxed_slice();
        let container = codec.encode(&values, &BasicContext);
        let decoded = codec.decode(&container, &BasicContext).unwrap();
        assert_eq!(decoded.len(), 3);
        assert_eq!(decoded, values);
    }

    // -----------------------------------------------------------------------
    // Malformed containers
    // -----------------------------------------------------------------------

    #[test]
    fn missing_size_marker_fails() {
        let codec = ListCodec::new(UUID);
        let mut container = codec.encode(&vec![Some(id(1))], &BasicContext);
        container.remove(&layout::size_key(&space()));

        let err = codec.decode(&container, &BasicContext).unwrap_err();
        assert_eq!(err, DecodeError::MissingSizeMarker { what: "list" });
    }

    #[test]
    fn foreign_container_fails_not_empty() {
        // A container that was never written by a composite codec must not
        // decode as a zero-length sequence.
        let codec = ListCodec::new(UUID);
        let err = codec.decode(&Container::new(), &BasicContext).unwrap_err();
        assert!(matches!(err, DecodeError::MissingSizeMarker { .. }));
    }

    #[test]
    fn negative_size_marker_fails() {
        let codec = ListCodec::new(UUID);
        let mut container = Container::new();
        container.set_raw(layout::size_key(&space()), Primitive::Int(-4));

        let err = codec.decode(&container, &BasicContext).unwrap_err();
        assert_eq!(err, DecodeError::InvalidSize { size: -4 });
    }

    #[test]
    fn inner_codec_error_propagates_unchanged() {
        let codec = ListCodec::new(CHARACTER);
        let mut container = Container::new();
        container.set_raw(layout::size_key(&space()), Primitive::Int(1));
        container.set_raw(layout::index_key(&space(), 0), Primitive::Str(String::new()));

        let err = codec.decode(&container, &BasicContext).unwrap_err();
        assert_eq!(err, DecodeError::EmptyText);
    }

    #[test]
    fn element_of_wrong_kind_fails() {
        let codec = ListCodec::new(UUID);
        let mut container = Container::new();
        container.set_raw(layout::size_key(&space()), Primitive::Int(1));
        container.set_raw(layout::index_key(&space(), 0), Primitive::Str("nope".into()));

        let err = codec.decode(&container, &BasicContext).unwrap_err();
        assert!(matches!(err, DecodeError::WrongKind { .. }));
    }

    // -----------------------------------------------------------------------
    // Properties
    // -----------------------------------------------------------------------

    proptest! {
        #[test]
        fn list_roundtrip_with_arbitrary_holes(
            values in proptest::collection::vec(proptest::option::of(any::<u128>()), 0..32)
        ) {
            let codec = ListCodec::new(UUID);
            let values: Vec<Option<Uuid>> =
                values.into_iter().map(|v| v.map(Uuid::from_u128)).collect();

            let container = codec.encode(&values, &BasicContext);
            let decoded = codec.decode(&container, &BasicContext).unwrap();
            prop_assert_eq!(decoded, values);
        }

        #[test]
        fn encoded_slot_count_is_presents_plus_marker(
            values in proptest::collection::vec(proptest::option::of(any::<u128>()), 0..32)
        ) {
            let codec = ListCodec::new(UUID);
            let values: Vec<Option<Uuid>> =
                values.into_iter().map(|v| v.map(Uuid::from_u128)).collect();
            let present = values.iter().filter(|v| v.is_some()).count();

            let container = codec.encode(&values, &BasicContext);
            prop_assert_eq!(container.len(), present + 1);
        }
    }
}
