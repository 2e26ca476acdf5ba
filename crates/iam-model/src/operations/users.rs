//! User operations

use serde::{Deserialize, Serialize};

use iam_types::constraint::{self, patterns};
use iam_types::{Validate, ValidationResult};

use crate::entities::{validate_tags, Tag, User};

use super::impl_paginated;

/// Creates a new user in the account.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// ARN of the policy to set as the user's permissions boundary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions_boundary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl Validate for CreateUserRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::optional_string("Path", self.path.as_deref(), 1, 512, Some(&patterns::PATH))?;
        constraint::required_string(
            "UserName",
            self.user_name.as_deref(),
            1,
            64,
            Some(&patterns::NAME),
        )?;
        constraint::optional_string(
            "PermissionsBoundary",
            self.permissions_boundary.as_deref(),
            20,
            2048,
            None,
        )?;
        validate_tags(self.tags.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateUserResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Retrieves a user. With no name given, the service resolves the user
/// from the credentials signing the request.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

impl Validate for GetUserRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::optional_string(
            "UserName",
            self.user_name.as_deref(),
            1,
            64,
            Some(&patterns::NAME),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetUserResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Renames a user and/or moves it to a new path.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateUserRequest {
    /// Current name of the user to update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_user_name: Option<String>,
}

impl Validate for UpdateUserRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string(
            "UserName",
            self.user_name.as_deref(),
            1,
            64,
            Some(&patterns::NAME),
        )?;
        constraint::optional_string(
            "NewPath",
            self.new_path.as_deref(),
            1,
            512,
            Some(&patterns::PATH),
        )?;
        constraint::optional_string(
            "NewUserName",
            self.new_user_name.as_deref(),
            1,
            64,
            Some(&patterns::NAME),
        )
    }
}

/// Deletes a user. The user must have no attached resources left.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

impl Validate for DeleteUserRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string(
            "UserName",
            self.user_name.as_deref(),
            1,
            64,
            Some(&patterns::NAME),
        )
    }
}

/// Lists users, optionally filtered by path prefix.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListUsersRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<i32>,
}

impl Validate for ListUsersRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::optional_string(
            "PathPrefix",
            self.path_prefix.as_deref(),
            1,
            512,
            Some(&patterns::PATH_PREFIX),
        )?;
        constraint::pagination(self.marker.as_deref(), self.max_items)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListUsersResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<User>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_truncated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

impl_paginated!(ListUsersResult);

#[cfg(test)]
mod tests {
    use super::*;
    use iam_types::{Paginated, ValidationError};

    #[test]
    fn test_create_user_requires_name() {
        let request = CreateUserRequest::default();
        assert_eq!(
            request.validate().unwrap_err(),
            ValidationError::MissingField { field: "UserName".to_string() }
        );
    }

    #[test]
    fn test_create_user_valid() {
        let request = CreateUserRequest {
            path: Some("/engineering/".to_string()),
            user_name: Some("alice".to_string()),
            tags: Some(vec![Tag::new("team", "identity")]),
            ..Default::default()
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_user_rejects_bad_path() {
        let request = CreateUserRequest {
            path: Some("engineering".to_string()),
            user_name: Some("alice".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            request.validate().unwrap_err(),
            ValidationError::PatternMismatch { .. }
        ));
    }

    #[test]
    fn test_get_user_allows_absent_name() {
        assert!(GetUserRequest::default().validate().is_ok());
    }

    #[test]
    fn test_list_users_pagination_contract() {
        let result = ListUsersResult::default();
        assert!(!result.is_truncated());
        assert!(result.marker().is_none());

        let result = ListUsersResult {
            is_truncated: Some(true),
            marker: Some("opaque-cursor".to_string()),
            ..Default::default()
        };
        assert!(result.is_truncated());
        assert_eq!(result.marker(), Some("opaque-cursor"));
    }
}
