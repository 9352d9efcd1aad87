use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::KeyError;
use crate::names::{validate_name, validate_namespace};

/// Fully-qualified identifier for one slot in a container.
///
/// A `SlotKey` pairs a namespace with a name. The textual form is
/// `"namespace:name"`. Keys are ordered, hashable, and cheap to clone, and
/// two keys are equal exactly when both components are equal.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotKey {
    namespace: String,
    name: String,
}

impl Serialize for SlotKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for SlotKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        SlotKey::parse(&text).map_err(serde::de::Error::custom)
    }
}

impl SlotKey {
    /// Create a slot key, validating both components.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Result<Self, KeyError> {
        let namespace = namespace.into();
        let name = name.into();
        validate_namespace(&namespace)?;
        validate_name(&name)?;
        Ok(Self { namespace, name })
    }

    /// Create a slot key without validating the name component.
    ///
    /// Used by [`KeySpace::key`], which accepts any suffix. The namespace is
    /// assumed to have been validated when the key space was created.
    pub(crate) fn unchecked(namespace: String, name: String) -> Self {
        Self { namespace, name }
    }

    /// Parse a slot key from its textual form `"namespace:name"`.
    ///
    /// Fails if the separator is missing or either component is invalid.
    pub fn parse(text: &str) -> Result<Self, KeyError> {
        let (namespace, name) = text.split_once(':').ok_or_else(|| KeyError::Malformed {
            text: text.to_string(),
            reason: "missing ':' separator".into(),
        })?;
        Self::new(namespace, name)
    }

    /// The namespace component.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The name component.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SlotKey({}:{})", self.namespace, self.name)
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.name)
    }
}

/// Namespace authority for deriving slot keys.
///
/// A `KeySpace` is created once with a validated namespace; [`KeySpace::key`]
/// is then a pure, deterministic, total function from suffix to [`SlotKey`].
/// All components that derive slot identifiers do so through a key space, so
/// one namespace has a single authority.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeySpace {
    namespace: String,
}

impl KeySpace {
    /// Create a key space with the given namespace.
    pub fn new(namespace: impl Into<String>) -> Result<Self, KeyError> {
        let namespace = namespace.into();
        validate_namespace(&namespace)?;
        Ok(Self { namespace })
    }

    /// The namespace this space derives keys in.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Derive the slot key for a suffix.
    ///
    /// Accepts any suffix verbatim; distinct suffixes produce distinct keys
    /// within this namespace. Keys built from suffixes that fail
    /// [`validate_name`](crate::names::validate_name) round-trip through
    /// memory but not through [`SlotKey::parse`].
    pub fn key(&self, suffix: &str) -> SlotKey {
        SlotKey::unchecked(self.namespace.clone(), suffix.to_string())
    }
}

impl Default for KeySpace {
    /// The process-wide default space (namespace `"satchel"`).
    fn default() -> Self {
        Self {
            namespace: "satchel".to_string(),
        }
    }
}

impl fmt::Debug for KeySpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeySpace({})", self.namespace)
    }
}

/// An entity identified by a [`SlotKey`].
///
/// Catalog entries (schemas, attribute definitions, registered kinds) carry a
/// stable key; the keyed-entity codec persists that key's textual form and
/// resolves it back through a caller-supplied lookup.
pub trait Keyed {
    /// The stable key identifying this entity.
    fn key(&self) -> &SlotKey;
}
