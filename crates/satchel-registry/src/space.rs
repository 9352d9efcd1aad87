use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, Result};

/// Unique identifier for a mounted space (UUID v7 for time-ordering).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpaceId(uuid::Uuid);

impl SpaceId {
    /// Generate a new time-ordered space ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7())
    }

    /// Create from an existing UUID.
    pub fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }

    /// Short representation (first 8 characters of the UUID).
    pub fn short_id(&self) -> String {
        self.0.to_string()[..8].to_string()
    }
}

impl Default for SpaceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SpaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SpaceId({})", self.short_id())
    }
}

impl fmt::Display for SpaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named, live data space.
///
/// Spaces are created by mounting and identified by name while mounted. The
/// [`SpaceId`] distinguishes two mount generations of the same name: a space
/// unmounted and mounted again is a different live instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    id: SpaceId,
    name: String,
}

impl Space {
    /// Create a space with a fresh ID. The name must already be validated.
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            id: SpaceId::new(),
            name: name.into(),
        }
    }

    /// The unique ID of this mount.
    pub fn id(&self) -> SpaceId {
        self.id
    }

    /// The name this space is mounted under.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Characters allowed in a space name besides lowercase letters and digits.
const ALLOWED_PUNCT: &[char] = &['.', '_', '-'];

/// Validate a space name, returning `Ok(())` if valid.
///
/// Space names are simple identifiers: non-empty, lowercase ASCII letters,
/// digits, `.`, `_`, `-`. No slashes or whitespace.
///
/// # Examples
///
/// ```
/// use satchel_registry::validate_space_name;
///
/// assert!(validate_space_name("main").is_ok());
/// assert!(validate_space_name("staging-eu.1").is_ok());
/// assert!(validate_space_name("").is_err());
/// assert!(validate_space_name("has space").is_err());
/// ```
pub fn validate_space_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(RegistryError::InvalidName {
            name: name.to_string(),
            reason: "space name must not be empty".into(),
        });
    }
    if let Some(ch) = name
        .chars()
        .find(|ch| !ch.is_ascii_lowercase() && !ch.is_ascii_digit() && !ALLOWED_PUNCT.contains(ch))
    {
        return Err(RegistryError::InvalidName {
            name: name.to_string(),
            reason: format!("contains forbidden character: {ch:?}"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_ids_are_unique() {
        let a = Space::new("a");
        let b = Space::new("a");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn space_id_short_format() {
        let id = SpaceId::new();
        assert_eq!(id.short_id().len(), 8);
    }

    #[test]
    fn valid_space_names() {
        assert!(validate_space_name("main").is_ok());
        assert!(validate_space_name("staging-eu.1").is_ok());
        assert!(validate_space_name("under_score").is_ok());
    }

    #[test]
    fn reject_empty_space_name() {
        assert!(validate_space_name("").is_err());
    }

    #[test]
    fn reject_uppercase() {
        assert!(validate_space_name("Main").is_err());
    }

    #[test]
    fn reject_slash_and_whitespace() {
        assert!(validate_space_name("a/b").is_err());
        assert!(validate_space_name("has space").is_err());
        assert!(validate_space_name("has\ttab").is_err());
    }

    #[test]
    fn serde_roundtrip() {
        let space = Space::new("main");
        let json = serde_json::to_string(&space).unwrap();
        let parsed: Space = serde_json::from_str(&json).unwrap();
        assert_eq!(space, parsed);
    }
}
