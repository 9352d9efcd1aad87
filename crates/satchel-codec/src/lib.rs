//! Typed codecs for the Satchel tag-container store.
//!
//! The host store understands four primitive kinds: integers, strings, byte
//! sequences, and nested containers. The codecs in this crate convert richer
//! domain values into and out of that primitive representation, and compose
//! recursively: an element codec can be wrapped in a list codec, which can be
//! the value codec of a map codec, to arbitrary depth.
//!
//! # Codecs
//!
//! - [`INT`], [`STRING`], [`BYTES`], [`CONTAINER`] — identity codecs over
//!   the primitive kinds themselves
//! - [`UUID`] — 128-bit identifiers as 16-byte sequences
//! - [`CHARACTER`] — single characters as one-character strings
//! - [`EnumCodec`] — enum members by declared name (see [`VariantName`])
//! - [`KeyedCodec`] — catalog entities by their slot key, resolved through a
//!   caller-supplied lookup
//! - [`SpaceCodec`] — live named spaces, resolved through a
//!   [`SpaceRegistry`](satchel_registry::SpaceRegistry)
//! - [`ArrayCodec`], [`ListCodec`], [`MapCodec`] — composite encodings over
//!   a nested container, sparse for null elements
//!
//! # Example
//!
//! ```
//! use satchel_codec::{ListCodec, UUID};
//! use satchel_store::{BasicContext, Codec};
//! use uuid::Uuid;
//!
//! let codec = ListCodec::new(UUID);
//! let values = vec![Some(Uuid::from_u128(1)), None, Some(Uuid::from_u128(3))];
//!
//! let container = codec.encode(&values, &BasicContext);
//! let decoded = codec.decode(&container, &BasicContext).unwrap();
//! assert_eq!(decoded, values);
//! ```

pub mod layout;
pub mod map;
pub mod raw;
pub mod reference;
pub mod scalar;
pub mod seq;

pub use map::MapCodec;
pub use raw::{RawCodec, BYTES, CONTAINER, INT, STRING};
pub use reference::SpaceCodec;
pub use scalar::{CharCodec, EnumCodec, KeyedCodec, UuidCodec, VariantName, CHARACTER, UUID};
pub use seq::{ArrayCodec, ListCodec};
