//! Identity codecs over the primitive kinds themselves.
//!
//! These store a primitive value as-is. The composite codecs use [`INT`] for
//! their size markers; embedding applications use them whenever a slot holds
//! a plain primitive with no richer domain type.

use std::marker::PhantomData;

use satchel_store::{Codec, Container, ConversionContext, DecodeResult, PrimitiveValue};

/// Identity codec: stores a primitive value unchanged.
#[derive(Clone, Copy, Debug)]
pub struct RawCodec<P>(PhantomData<P>);

impl<P> RawCodec<P> {
    /// Create the identity codec for a primitive type.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<P> Default for RawCodec<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PrimitiveValue + Clone> Codec for RawCodec<P> {
    type Primitive = P;
    type Complex = P;

    fn encode(&self, value: &P, _ctx: &dyn ConversionContext) -> P {
        value.clone()
    }

    fn decode(&self, primitive: &P, _ctx: &dyn ConversionContext) -> DecodeResult<P> {
        Ok(primitive.clone())
    }
}

/// Identity codec for 64-bit signed integers.
pub const INT: RawCodec<i64> = RawCodec::new();

/// Identity codec for UTF-8 strings.
pub const STRING: RawCodec<String> = RawCodec::new();

/// Identity codec for raw byte sequences.
pub const BYTES: RawCodec<Vec<u8>> = RawCodec::new();

/// Identity codec for nested containers.
pub const CONTAINER: RawCodec<Container> = RawCodec::new();
