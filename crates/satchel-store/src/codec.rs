//! The [`Codec`] contract and the [`ConversionContext`] it operates in.

use crate::container::Container;
use crate::error::DecodeResult;
use crate::primitive::PrimitiveValue;

/// Ambient handle through which codecs obtain fresh containers.
///
/// The context is supplied by the store and passed by reference through
/// every encode/decode call. Codecs use it for exactly one thing: requesting
/// a new empty [`Container`] when encoding a composite value.
pub trait ConversionContext {
    /// Allocate an empty container scoped to the current conversion.
    fn new_container(&self) -> Container;
}

/// A standalone conversion context for callers without a store.
#[derive(Clone, Copy, Debug, Default)]
pub struct BasicContext;

impl ConversionContext for BasicContext {
    fn new_container(&self) -> Container {
        Container::new()
    }
}

/// A stateless bidirectional converter between a complex domain value and a
/// primitive storage representation.
///
/// Each codec pairs a [`Complex`](Self::Complex) domain type with the
/// [`Primitive`](Self::Primitive) kind it is stored as. Codec instances hold
/// no per-call state: the same instance may be shared across all threads for
/// the process lifetime, and scalar codecs are exposed as `const` singletons.
///
/// # Contract
///
/// - [`encode`](Self::encode) is total over all values of the complex type
///   and depends on no external mutable state beyond container creation
///   through `ctx`.
/// - [`decode`](Self::decode) is partial: it fails when the primitive does
///   not represent a valid encoding (malformed container, missing marker,
///   out-of-range reference).
/// - Round-trip: `decode(encode(v))` equals `v` under the complex type's
///   equality, except where the type legitimately loses and regains identity
///   through external resolution (named space references).
pub trait Codec {
    /// The storage representation type (one of the four primitive kinds).
    type Primitive: PrimitiveValue;

    /// The domain value type.
    type Complex;

    /// Convert a complex value to its primitive representation.
    fn encode(&self, value: &Self::Complex, ctx: &dyn ConversionContext) -> Self::Primitive;

    /// Reconstruct a complex value from its primitive representation.
    fn decode(
        &self,
        primitive: &Self::Primitive,
        ctx: &dyn ConversionContext,
    ) -> DecodeResult<Self::Complex>;
}
