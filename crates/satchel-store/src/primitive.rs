use std::fmt;

use serde::{Deserialize, Serialize};

use crate::container::Container;

/// The kind of a primitive value.
///
/// These are the only value kinds the host store writes and reads natively.
/// Codecs declare which kind they produce; kind mismatches on read surface
/// as [`DecodeError::WrongKind`](crate::DecodeError::WrongKind).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveKind {
    /// 64-bit signed integer.
    Int,
    /// UTF-8 string.
    Str,
    /// Raw byte sequence.
    Bytes,
    /// Nested key-value container.
    Container,
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => write!(f, "integer"),
            Self::Str => write!(f, "string"),
            Self::Bytes => write!(f, "bytes"),
            Self::Container => write!(f, "container"),
        }
    }
}

/// A value in one of the four natively-storable kinds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Primitive {
    Int(i64),
    Str(String),
    Bytes(Vec<u8>),
    Container(Container),
}

impl Primitive {
    /// The kind of this value.
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Self::Int(_) => PrimitiveKind::Int,
            Self::Str(_) => PrimitiveKind::Str,
            Self::Bytes(_) => PrimitiveKind::Bytes,
            Self::Container(_) => PrimitiveKind::Container,
        }
    }
}

/// A Rust type storable as a [`Primitive`].
///
/// Implemented by exactly the four types backing the primitive kinds:
/// `i64`, `String`, `Vec<u8>`, and [`Container`]. Codecs use the
/// associated [`KIND`](Self::KIND) for diagnostics and the two conversions
/// to move values across the store boundary.
pub trait PrimitiveValue: Sized {
    /// The kind tag for this type.
    const KIND: PrimitiveKind;

    /// Wrap this value in a [`Primitive`].
    fn into_primitive(self) -> Primitive;

    /// View a [`Primitive`] as this type, if the kind matches.
    fn from_primitive(primitive: &Primitive) -> Option<&Self>;
}

impl PrimitiveValue for i64 {
    const KIND: PrimitiveKind = PrimitiveKind::Int;

    fn into_primitive(self) -> Primitive {
        Primitive::Int(self)
    }

    fn from_primitive(primitive: &Primitive) -> Option<&Self> {
        match primitive {
            Primitive::Int(v) => Some(v),
            _ => None,
        }
    }
}

impl PrimitiveValue for String {
    const KIND: PrimitiveKind = PrimitiveKind::Str;

    fn into_primitive(self) -> Primitive {
        Primitive::Str(self)
    }

    fn from_primitive(primitive: &Primitive) -> Option<&Self> {
        match primitive {
            Primitive::Str(v) => Some(v),
            _ => None,
        }
    }
}

impl PrimitiveValue for Vec<u8> {
    const KIND: PrimitiveKind = PrimitiveKind::Bytes;

    fn into_primitive(self) -> Primitive {
        Primitive::Bytes(self)
    }

    fn from_primitive(primitive: &Primitive) -> Option<&Self> {
        match primitive {
            Primitive::Bytes(v) => Some(v),
            _ => None,
        }
    }
}

impl PrimitiveValue for Container {
    const KIND: PrimitiveKind = PrimitiveKind::Container;

    fn into_primitive(self) -> Primitive {
        Primitive::Container(self)
    }

    fn from_primitive(primitive: &Primitive) -> Option<&Self> {
        match primitive {
            Primitive::Container(v) => Some(v),
            _ => None,
        }
    }
}
