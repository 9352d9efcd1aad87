//! Namespace and slot-name validation.
//!
//! Valid namespaces:
//! - Must be non-empty
//! - May contain only lowercase ASCII letters, digits, `.`, `_`, `-`
//!
//! Valid slot names follow the same rules and additionally allow `/` for
//! hierarchical names (e.g. `stats/wins`). Components between slashes must be
//! non-empty.

use crate::error::{KeyError, Result};

fn is_namespace_char(ch: char) -> bool {
    ch.is_ascii_lowercase() || ch.is_ascii_digit() || matches!(ch, '.' | '_' | '-')
}

fn is_name_char(ch: char) -> bool {
    is_namespace_char(ch) || ch == '/'
}

/// Validate a namespace, returning `Ok(())` if valid.
///
/// # Examples
///
/// ```
/// use satchel_types::names::validate_namespace;
///
/// assert!(validate_namespace("satchel").is_ok());
/// assert!(validate_namespace("my-plugin").is_ok());
/// assert!(validate_namespace("").is_err());
/// assert!(validate_namespace("Upper").is_err());
/// ```
pub fn validate_namespace(namespace: &str) -> Result<()> {
    if namespace.is_empty() {
        return Err(KeyError::InvalidNamespace {
            namespace: namespace.to_string(),
            reason: "namespace must not be empty".into(),
        });
    }
    if let Some(ch) = namespace.chars().find(|ch| !is_namespace_char(*ch)) {
        return Err(KeyError::InvalidNamespace {
            namespace: namespace.to_string(),
            reason: format!("contains forbidden character: {ch:?}"),
        });
    }
    Ok(())
}

/// Validate a slot name, returning `Ok(())` if valid.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(KeyError::InvalidName {
            name: name.to_string(),
            reason: "slot name must not be empty".into(),
        });
    }
    if let Some(ch) = name.chars().find(|ch| !is_name_char(*ch)) {
        return Err(KeyError::InvalidName {
            name: name.to_string(),
            reason: format!("contains forbidden character: {ch:?}"),
        });
    }
    // Path components between slashes must be non-empty.
    if name.split('/').any(str::is_empty) {
        return Err(KeyError::InvalidName {
            name: name.to_string(),
            reason: "path components must not be empty".into(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_namespaces() {
        assert!(validate_namespace("satchel").is_ok());
        assert!(validate_namespace("my-plugin").is_ok());
        assert!(validate_namespace("v1.core").is_ok());
        assert!(validate_namespace("under_score").is_ok());
    }

    #[test]
    fn reject_empty_namespace() {
        assert!(validate_namespace("").is_err());
    }

    #[test]
    fn reject_uppercase_namespace() {
        assert!(validate_namespace("Satchel").is_err());
    }

    #[test]
    fn reject_namespace_with_slash() {
        assert!(validate_namespace("a/b").is_err());
    }

    #[test]
    fn reject_namespace_with_space() {
        assert!(validate_namespace("has space").is_err());
    }

    #[test]
    fn valid_names() {
        assert!(validate_name("size").is_ok());
        assert!(validate_name("0").is_ok());
        assert!(validate_name("key-12").is_ok());
        assert!(validate_name("stats/wins").is_ok());
    }

    #[test]
    fn reject_empty_name() {
        assert!(validate_name("").is_err());
    }

    #[test]
    fn reject_name_with_colon() {
        assert!(validate_name("a:b").is_err());
    }

    #[test]
    fn reject_empty_path_component() {
        assert!(validate_name("a//b").is_err());
        assert!(validate_name("/leading").is_err());
        assert!(validate_name("trailing/").is_err());
    }
}
