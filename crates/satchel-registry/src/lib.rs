//! Live data-space registry for Satchel.
//!
//! A *space* is a named, live data partition that can be mounted into and
//! unmounted from a running process. Persisted values may refer to a space by
//! name; decoding such a reference succeeds only while a space with that name
//! is actually mounted. Absence is an ordinary condition ("not currently
//! mounted"), not a registry failure — callers decide how to treat it.
//!
//! # Modules
//!
//! - [`error`] — Error types for registry operations
//! - [`space`] — The [`Space`] type and space-name validation
//! - [`traits`] — The [`SpaceRegistry`] trait defining the registry interface
//! - [`memory`] — In-memory [`InMemorySpaceRegistry`] for tests and embedding

pub mod error;
pub mod memory;
pub mod space;
pub mod traits;

pub use error::{RegistryError, Result};
pub use memory::InMemorySpaceRegistry;
pub use space::{validate_space_name, Space, SpaceId};
pub use traits::SpaceRegistry;
