//! Scalar codecs: identifiers, characters, enum members, keyed entities.

use std::marker::PhantomData;

use uuid::Uuid;

use satchel_store::{Codec, ConversionContext, DecodeError, DecodeResult};
use satchel_types::{Keyed, SlotKey};

/// Codec for 128-bit identifiers, stored as a 16-byte sequence.
///
/// The high 8 bytes carry the most-significant 64 bits and the low 8 bytes
/// the least-significant 64 bits, each half big-endian. This matches the
/// layout of identifiers persisted as two 64-bit words.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidCodec;

/// Singleton [`UuidCodec`].
pub const UUID: UuidCodec = UuidCodec;

impl Codec for UuidCodec {
    type Primitive = Vec<u8>;
    type Complex = Uuid;

    fn encode(&self, value: &Uuid, _ctx: &dyn ConversionContext) -> Vec<u8> {
        let (high, low) = value.as_u64_pair();
        let mut bytes = Vec::with_capacity(16);
        bytes.extend_from_slice(&high.to_be_bytes());
        bytes.extend_from_slice(&low.to_be_bytes());
        bytes
    }

    fn decode(&self, primitive: &Vec<u8>, _ctx: &dyn ConversionContext) -> DecodeResult<Uuid> {
        if primitive.len() != 16 {
            return Err(DecodeError::InvalidLength {
                expected: 16,
                actual: primitive.len(),
            });
        }
        let mut high = [0u8; 8];
        let mut low = [0u8; 8];
        high.copy_from_slice(&primitive[..8]);
        low.copy_from_slice(&primitive[8..]);
        Ok(Uuid::from_u64_pair(
            u64::from_be_bytes(high),
            u64::from_be_bytes(low),
        ))
    }
}

/// Codec for single characters, stored as a one-character string.
#[derive(Clone, Copy, Debug, Default)]
pub struct CharCodec;

/// Singleton [`CharCodec`].
pub const CHARACTER: CharCodec = CharCodec;

impl Codec for CharCodec {
    type Primitive = String;
    type Complex = char;

    fn encode(&self, value: &char, _ctx: &dyn ConversionContext) -> String {
        value.to_string()
    }

    fn decode(&self, primitive: &String, _ctx: &dyn ConversionContext) -> DecodeResult<char> {
        primitive.chars().next().ok_or(DecodeError::EmptyText)
    }
}

/// An enum whose members carry stable declared names.
///
/// The name is the persisted form, so renaming a variant breaks previously
/// stored data. Lookup is by exact match.
pub trait VariantName: Sized {
    /// The declared name of this member.
    fn as_name(&self) -> &'static str;

    /// Look up a member by exact name.
    fn from_name(name: &str) -> Option<Self>;
}

/// Codec for enum members, stored by declared name.
pub struct EnumCodec<E> {
    _marker: PhantomData<fn() -> E>,
}

impl<E> EnumCodec<E> {
    /// Create the codec for an enum type.
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<E> Default for EnumCodec<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for EnumCodec<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EnumCodec<{}>", std::any::type_name::<E>())
    }
}

impl<E: VariantName> Codec for EnumCodec<E> {
    type Primitive = String;
    type Complex = E;

    fn encode(&self, value: &E, _ctx: &dyn ConversionContext) -> String {
        value.as_name().to_string()
    }

    fn decode(&self, primitive: &String, _ctx: &dyn ConversionContext) -> DecodeResult<E> {
        E::from_name(primitive).ok_or_else(|| DecodeError::UnknownName {
            kind: "variant",
            name: primitive.clone(),
        })
    }
}

/// Codec for catalog entities identified by a [`SlotKey`].
///
/// The persisted form is the key's textual form; decoding parses the key and
/// resolves the entity through the supplied lookup. Resolution failure means
/// the entity is unknown to the catalog at decode time.
pub struct KeyedCodec<T, F> {
    resolver: F,
    _marker: PhantomData<fn() -> T>,
}

impl<T, F> KeyedCodec<T, F>
where
    T: Keyed,
    F: Fn(&SlotKey) -> Option<T>,
{
    /// Create a codec for an entity type with the given resolver.
    pub fn new(resolver: F) -> Self {
        Self {
            resolver,
            _marker: PhantomData,
        }
    }
}

impl<T, F> std::fmt::Debug for KeyedCodec<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "KeyedCodec<{}>", std::any::type_name::<T>())
    }
}

impl<T, F> Codec for KeyedCodec<T, F>
where
    T: Keyed,
    F: Fn(&SlotKey) -> Option<T>,
{
    type Primitive = String;
    type Complex = T;

    fn encode(&self, value: &T, _ctx: &dyn ConversionContext) -> String {
        value.key().to_string()
    }

    fn decode(&self, primitive: &String, _ctx: &dyn ConversionContext) -> DecodeResult<T> {
        let key = SlotKey::parse(primitive)?;
        (self.resolver)(&key).ok_or_else(|| DecodeError::UnknownName {
            kind: "entity",
            name: primitive.clone(),
        })
    }
}
