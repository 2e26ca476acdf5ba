//! Tagging operations for users and roles

use serde::{Deserialize, Serialize};

use iam_types::constraint::{self, patterns};
use iam_types::{Validate, ValidationError, ValidationResult};

use crate::entities::{validate_tag_keys, validate_tags, Tag};

use super::impl_paginated;

fn required_tags(tags: Option<&[Tag]>) -> ValidationResult<()> {
    if tags.is_none() {
        return Err(ValidationError::MissingField { field: "Tags".to_string() });
    }
    validate_tags(tags)
}

fn required_tag_keys(keys: Option<&[String]>) -> ValidationResult<()> {
    if keys.is_none() {
        return Err(ValidationError::MissingField { field: "TagKeys".to_string() });
    }
    validate_tag_keys(keys)
}

/// Adds tags to a user. A tag whose key already exists overwrites the
/// existing value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl Validate for TagUserRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("UserName", self.user_name.as_deref(), 1, 64, Some(&patterns::NAME))?;
        required_tags(self.tags.as_deref())
    }
}

/// Removes tags from a user by key.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UntagUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_keys: Option<Vec<String>>,
}

impl Validate for UntagUserRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("UserName", self.user_name.as_deref(), 1, 64, Some(&patterns::NAME))?;
        required_tag_keys(self.tag_keys.as_deref())
    }
}

/// Lists the tags attached to a user.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListUserTagsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<i32>,
}

impl Validate for ListUserTagsRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("UserName", self.user_name.as_deref(), 1, 64, Some(&patterns::NAME))?;
        constraint::pagination(self.marker.as_deref(), self.max_items)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListUserTagsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_truncated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

/// Adds tags to a role.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagRoleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl Validate for TagRoleRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("RoleName", self.role_name.as_deref(), 1, 64, Some(&patterns::NAME))?;
        required_tags(self.tags.as_deref())
    }
}

/// Removes tags from a role by key.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UntagRoleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_keys: Option<Vec<String>>,
}

impl Validate for UntagRoleRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("RoleName", self.role_name.as_deref(), 1, 64, Some(&patterns::NAME))?;
        required_tag_keys(self.tag_keys.as_deref())
    }
}

/// Lists the tags attached to a role.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListRoleTagsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<i32>,
}

impl Validate for ListRoleTagsRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("RoleName", self.role_name.as_deref(), 1, 64, Some(&patterns::NAME))?;
        constraint::pagination(self.marker.as_deref(), self.max_items)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListRoleTagsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_truncated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

impl_paginated!(ListUserTagsResult, ListRoleTagsResult);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_user_requires_tags() {
        let request = TagUserRequest {
            user_name: Some("alice".to_string()),
            tags: None,
        };
        assert_eq!(
            request.validate().unwrap_err(),
            ValidationError::MissingField { field: "Tags".to_string() }
        );
    }

    #[test]
    fn test_tag_role_validates_entries() {
        let request = TagRoleRequest {
            role_name: Some("deployer".to_string()),
            tags: Some(vec![Tag::new("", "platform")]),
        };
        assert!(request.validate().is_err());

        let request = TagRoleRequest {
            role_name: Some("deployer".to_string()),
            tags: Some(vec![Tag::new("team", "platform")]),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_untag_requires_keys() {
        let request = UntagRoleRequest {
            role_name: Some("deployer".to_string()),
            tag_keys: None,
        };
        assert!(request.validate().is_err());
    }
}
