//! The [`SpaceRegistry`] trait defining the registry interface.
//!
//! Any backend (in-memory, host-runtime bridge) implements this trait to
//! expose the set of currently-mounted spaces.

use std::sync::Arc;

use crate::error::Result;
use crate::space::Space;

/// Registry of currently-mounted spaces.
///
/// Implementations must be thread-safe (`Send + Sync`). Resolution is by
/// exact name; a missing name is an ordinary `None`, never an error, since
/// spaces come and go at runtime.
pub trait SpaceRegistry: Send + Sync {
    /// Resolve a mounted space by exact name.
    ///
    /// Returns `None` if no space with that name is currently mounted.
    fn resolve(&self, name: &str) -> Option<Arc<Space>>;

    /// Mount a new space under the given name.
    ///
    /// Fails if the name is invalid or a space with that name is already
    /// mounted.
    fn mount(&self, name: &str) -> Result<Arc<Space>>;

    /// Unmount the space with the given name.
    ///
    /// Returns `Ok(true)` if a space was mounted and is now removed,
    /// `Ok(false)` if no space with that name was mounted.
    fn unmount(&self, name: &str) -> Result<bool>;

    /// All currently-mounted spaces, sorted by name.
    fn list(&self) -> Vec<Arc<Space>>;

    /// Returns `true` if a space with the given name is mounted.
    fn is_mounted(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }
}
