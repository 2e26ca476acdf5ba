//! Resource tags

use serde::{Deserialize, Serialize};

use iam_types::constraint::{self, patterns};
use iam_types::ValidationResult;

/// A key/value pair attached to a user, role, policy, or other taggable
/// resource. Both halves are required by the service; the value may be
/// the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { key: key.into(), value: value.into() }
    }
}

/// Checks every tag in an optional list against the published tag
/// constraints: key 1-128 chars, value 0-256 chars, both drawn from the
/// tag character class.
pub fn validate_tags(tags: Option<&[Tag]>) -> ValidationResult<()> {
    for tag in tags.unwrap_or_default() {
        constraint::required_string("Tag.Key", Some(&tag.key), 1, 128, Some(&patterns::TAG))?;
        constraint::required_string("Tag.Value", Some(&tag.value), 0, 256, Some(&patterns::TAG))?;
    }
    Ok(())
}

/// Checks a `TagKeys` list as supplied to the untag operations.
pub fn validate_tag_keys(keys: Option<&[String]>) -> ValidationResult<()> {
    constraint::string_list("TagKeys", keys, 1, 128, Some(&patterns::TAG))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_new() {
        let tag = Tag::new("team", "identity");
        assert_eq!(tag.key, "team");
        assert_eq!(tag.value, "identity");
    }

    #[test]
    fn test_tag_wire_names() {
        let json = serde_json::to_string(&Tag::new("k", "v")).unwrap();
        assert_eq!(json, r#"{"Key":"k","Value":"v"}"#);
    }

    #[test]
    fn test_empty_value_allowed_empty_key_rejected() {
        assert!(validate_tags(Some(&[Tag::new("k", "")])).is_ok());
        assert!(validate_tags(Some(&[Tag::new("", "v")])).is_err());
    }

    #[test]
    fn test_oversized_key_rejected() {
        let tag = Tag::new("k".repeat(129), "v");
        assert!(validate_tags(Some(&[tag])).is_err());
    }
}
