//! Tag-container persistence boundary for Satchel.
//!
//! The host store understands exactly four primitive value kinds: integers,
//! strings, byte sequences, and nested key-value containers. This crate
//! defines that primitive model, the [`Container`] slot map, and the
//! [`Codec`] contract through which richer domain values are converted into
//! and out of primitives. The codec implementations themselves live in
//! `satchel-codec`.
//!
//! # Key Types
//!
//! - [`Primitive`] / [`PrimitiveKind`] — the four natively-storable kinds
//! - [`Container`] — ordered, sparse slot map; itself a primitive
//! - [`Codec`] — bidirectional converter between a complex and a primitive type
//! - [`ConversionContext`] — ambient handle through which codecs obtain
//!   fresh containers
//! - [`InMemoryTagStore`] — `HashMap`-based root-container store for tests
//!   and embedding
//!
//! # Design Rules
//!
//! 1. Codecs are stateless and immutable; one instance serves all threads.
//! 2. Encoding is total; decoding is partial and fails with [`DecodeError`].
//! 3. A container key maps to at most one primitive; absence is
//!    distinguishable from every written value.
//! 4. Inner-codec errors propagate unchanged — no partial results, no
//!    default substitution.
//! 5. The store never interprets slot contents beyond their primitive kind.

pub mod codec;
pub mod container;
pub mod error;
pub mod memory;
pub mod primitive;
pub mod traits;

pub use codec::{BasicContext, Codec, ConversionContext};
pub use container::Container;
pub use error::{DecodeError, DecodeResult, StoreError, StoreResult};
pub use memory::InMemoryTagStore;
pub use primitive::{Primitive, PrimitiveKind, PrimitiveValue};
pub use traits::{OwnerId, TagStore};
