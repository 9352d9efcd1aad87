//! Foundation types for Satchel.
//!
//! This crate provides the slot-key naming types used throughout the Satchel
//! system. Every other Satchel crate depends on `satchel-types`.
//!
//! # Key Types
//!
//! - [`SlotKey`] — Fully-qualified slot identifier (`namespace:name`)
//! - [`KeySpace`] — Namespace authority that derives [`SlotKey`]s from suffixes
//! - [`Keyed`] — Trait for entities identified by a [`SlotKey`]
//! - [`KeyError`] — Errors from key parsing and validation

pub mod error;
pub mod key;
pub mod names;

pub use error::KeyError;
pub use key::{KeySpace, Keyed, SlotKey};
pub use names::{validate_name, validate_namespace};
