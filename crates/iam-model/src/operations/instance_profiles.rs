//! Instance profile operations

use serde::{Deserialize, Serialize};

use iam_types::constraint::{self, patterns};
use iam_types::{Validate, ValidationResult};

use crate::entities::{validate_tags, InstanceProfile, Tag};

use super::impl_paginated;

/// Creates a new instance profile. A profile carries at most one role.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateInstanceProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_profile_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl Validate for CreateInstanceProfileRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string(
            "InstanceProfileName",
            self.instance_profile_name.as_deref(),
            1,
            128,
            Some(&patterns::NAME),
        )?;
        constraint::optional_string("Path", self.path.as_deref(), 1, 512, Some(&patterns::PATH))?;
        validate_tags(self.tags.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateInstanceProfileResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_profile: Option<InstanceProfile>,
}

/// Retrieves an instance profile, including its role.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetInstanceProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_profile_name: Option<String>,
}

impl Validate for GetInstanceProfileRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string(
            "InstanceProfileName",
            self.instance_profile_name.as_deref(),
            1,
            128,
            Some(&patterns::NAME),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetInstanceProfileResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_profile: Option<InstanceProfile>,
}

/// Deletes an instance profile. Remove its role first.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteInstanceProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_profile_name: Option<String>,
}

impl Validate for DeleteInstanceProfileRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string(
            "InstanceProfileName",
            self.instance_profile_name.as_deref(),
            1,
            128,
            Some(&patterns::NAME),
        )
    }
}

/// Lists instance profiles under a path prefix.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListInstanceProfilesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<i32>,
}

impl Validate for ListInstanceProfilesRequest {
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
pub struct ListInstanceProfilesResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_profiles: Option<Vec<InstanceProfile>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_truncated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

/// Lists the instance profiles that carry a given role.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListInstanceProfilesForRoleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<i32>,
}

impl Validate for ListInstanceProfilesForRoleRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("RoleName", self.role_name.as_deref(), 1, 64, Some(&patterns::NAME))?;
        constraint::pagination(self.marker.as_deref(), self.max_items)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListInstanceProfilesForRoleResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_profiles: Option<Vec<InstanceProfile>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_truncated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

/// Adds a role to an instance profile.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddRoleToInstanceProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_profile_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
}

impl Validate for AddRoleToInstanceProfileRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string(
            "InstanceProfileName",
            self.instance_profile_name.as_deref(),
            1,
            128,
            Some(&patterns::NAME),
        )?;
        constraint::required_string("RoleName", self.role_name.as_deref(), 1, 64, Some(&patterns::NAME))
    }
}

/// Removes a role from an instance profile.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RemoveRoleFromInstanceProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_profile_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
}

impl Validate for RemoveRoleFromInstanceProfileRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string(
            "InstanceProfileName",
            self.instance_profile_name.as_deref(),
            1,
            128,
            Some(&patterns::NAME),
        )?;
        constraint::required_string("RoleName", self.role_name.as_deref(), 1, 64, Some(&patterns::NAME))
    }
}

impl_paginated!(ListInstanceProfilesResult, ListInstanceProfilesForRoleResult);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_with_path_and_tags() {
        let request = CreateInstanceProfileRequest {
            instance_profile_name: Some("web-servers".to_string()),
            path: Some("/application/".to_string()),
            tags: Some(vec![Tag::new("team", "platform")]),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_list_for_role_requires_role_name() {
        let request = ListInstanceProfilesForRoleRequest::default();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_add_role_both_names_checked() {
        let request = AddRoleToInstanceProfileRequest {
            instance_profile_name: Some("web-servers".to_string()),
            role_name: Some("bad name".to_string()),
        };
        assert!(request.validate().is_err());
    }
}
