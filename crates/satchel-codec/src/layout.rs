//! Reserved slot layout shared by the composite codecs.
//!
//! This layout is the on-disk format contract for composite containers and
//! must stay stable for compatibility with persisted data:
//!
//! - `"size"` — integer slot recording the logical element/entry count
//! - `"0"`, `"1"`, … — one slot per present array/list element
//! - `"key-<i>"` / `"value-<i>"` — one slot pair per present map entry
//!
//! All reserved keys are derived through the composite codec's [`KeySpace`],
//! so the namespace component is uniform across a container.

use satchel_store::{Container, ConversionContext, DecodeError, DecodeResult};
use satchel_types::{KeySpace, SlotKey};

use crate::raw;

/// Suffix of the reserved size-marker slot.
pub const SIZE: &str = "size";

/// The size-marker key for a composite container.
pub fn size_key(space: &KeySpace) -> SlotKey {
    space.key(SIZE)
}

/// The element key for an array/list index.
pub fn index_key(space: &KeySpace, index: usize) -> SlotKey {
    space.key(&index.to_string())
}

/// The key-slot key for a map entry index.
pub fn entry_key_key(space: &KeySpace, index: usize) -> SlotKey {
    space.key(&format!("key-{index}"))
}

/// The value-slot key for a map entry index.
pub fn entry_value_key(space: &KeySpace, index: usize) -> SlotKey {
    space.key(&format!("value-{index}"))
}

/// Read and validate a composite container's size marker.
///
/// Fails with [`DecodeError::MissingSizeMarker`] if the reserved slot is
/// absent (foreign or corrupted data) and [`DecodeError::InvalidSize`] if
/// the stored integer is negative.
pub(crate) fn read_size(
    container: &Container,
    space: &KeySpace,
    what: &'static str,
    ctx: &dyn ConversionContext,
) -> DecodeResult<usize> {
    let size = container
        .get(&size_key(space), &raw::INT, ctx)?
        .ok_or(DecodeError::MissingSizeMarker { what })?;
    usize::try_from(size).map_err(|_| DecodeError::InvalidSize { size })
}
