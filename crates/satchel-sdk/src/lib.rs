//! High-level API for Satchel.
//!
//! Provides a unified entry point for applications embedding Satchel:
//! a [`Satchel`] instance bundles a tag store, a space registry, and a key
//! space, and exposes typed per-owner tag access without manual container
//! plumbing.

pub mod client;
pub mod error;

pub use client::Satchel;
pub use error::{SdkError, SdkResult};

// Re-export key types
pub use satchel_codec::{
    ArrayCodec, EnumCodec, KeyedCodec, ListCodec, MapCodec, SpaceCodec, VariantName, BYTES,
    CHARACTER, INT, STRING, UUID,
};
pub use satchel_registry::{Space, SpaceRegistry};
pub use satchel_store::{Codec, Container, DecodeError, OwnerId};
pub use satchel_types::{KeySpace, Keyed, SlotKey};
