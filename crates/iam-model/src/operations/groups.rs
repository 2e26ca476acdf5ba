//! Group operations

use serde::{Deserialize, Serialize};

use iam_types::constraint::{self, patterns};
use iam_types::{Validate, ValidationResult};

use crate::entities::{Group, User};

use super::impl_paginated;

/// Creates a new group.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateGroupRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
}

impl Validate for CreateGroupRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::optional_string("Path", self.path.as_deref(), 1, 512, Some(&patterns::PATH))?;
        constraint::required_string(
            "GroupName",
            self.group_name.as_deref(),
            1,
            128,
            Some(&patterns::NAME),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateGroupResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<Group>,
}

/// Retrieves a group and pages through its member users.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetGroupRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<i32>,
}

impl Validate for GetGroupRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string(
            "GroupName",
            self.group_name.as_deref(),
            1,
            128,
            Some(&patterns::NAME),
        )?;
        constraint::pagination(self.marker.as_deref(), self.max_items)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetGroupResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<Group>,
    /// Members of the group, paged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<User>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_truncated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

/// Renames a group and/or moves it to a new path.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateGroupRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_group_name: Option<String>,
}

impl Validate for UpdateGroupRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string(
            "GroupName",
            self.group_name.as_deref(),
            1,
            128,
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
            "NewGroupName",
            self.new_group_name.as_deref(),
            1,
            128,
            Some(&patterns::NAME),
        )
    }
}

/// Deletes a group. The group must be empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteGroupRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
}

impl Validate for DeleteGroupRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string(
            "GroupName",
            self.group_name.as_deref(),
            1,
            128,
            Some(&patterns::NAME),
        )
    }
}

/// Lists groups, optionally filtered by path prefix.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListGroupsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<i32>,
}

impl Validate for ListGroupsRequest {
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
pub struct ListGroupsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<Group>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_truncated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

/// Adds a user to a group.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddUserToGroupRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

impl Validate for AddUserToGroupRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string(
            "GroupName",
            self.group_name.as_deref(),
            1,
            128,
            Some(&patterns::NAME),
        )?;
        constraint::required_string(
            "UserName",
            self.user_name.as_deref(),
            1,
            64,
            Some(&patterns::NAME),
        )
    }
}

/// Removes a user from a group.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RemoveUserFromGroupRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

impl Validate for RemoveUserFromGroupRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string(
            "GroupName",
            self.group_name.as_deref(),
            1,
            128,
            Some(&patterns::NAME),
        )?;
        constraint::required_string(
            "UserName",
            self.user_name.as_deref(),
            1,
            64,
            Some(&patterns::NAME),
        )
    }
}

/// Lists the groups a user belongs to.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListGroupsForUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<i32>,
}

impl Validate for ListGroupsForUserRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string(
            "UserName",
            self.user_name.as_deref(),
            1,
            64,
            Some(&patterns::NAME),
        )?;
        constraint::pagination(self.marker.as_deref(), self.max_items)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListGroupsForUserResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<Group>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_truncated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

impl_paginated!(GetGroupResult, ListGroupsResult, ListGroupsForUserResult);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_name_length_caps_at_128() {
        let request = CreateGroupRequest {
            group_name: Some("g".repeat(128)),
            ..Default::default()
        };
        assert!(request.validate().is_ok());

        let request = CreateGroupRequest {
            group_name: Some("g".repeat(129)),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_add_user_needs_both_names() {
        let request = AddUserToGroupRequest {
            group_name: Some("devs".to_string()),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }
}
