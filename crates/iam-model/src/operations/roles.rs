//! Role operations

use serde::{Deserialize, Serialize};

use iam_types::constraint::{self, patterns};
use iam_types::{Validate, ValidationResult};

use crate::entities::{validate_tags, Role, Tag};

use super::impl_paginated;

/// Creates a new role with the given trust policy.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateRoleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    /// The trust policy granting permission to assume the role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assume_role_policy_document: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Maximum session duration in seconds, 3600-43200.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_session_duration: Option<i32>,
    /// ARN of the policy to set as the role's permissions boundary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions_boundary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl Validate for CreateRoleRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::optional_string("Path", self.path.as_deref(), 1, 512, Some(&patterns::PATH))?;
        constraint::required_string(
            "RoleName",
            self.role_name.as_deref(),
            1,
            64,
            Some(&patterns::NAME),
        )?;
        constraint::required_string(
            "AssumeRolePolicyDocument",
            self.assume_role_policy_document.as_deref(),
            1,
            131072,
            Some(&patterns::POLICY_DOCUMENT),
        )?;
        constraint::optional_string(
            "Description",
            self.description.as_deref(),
            0,
            1000,
            Some(&patterns::DESCRIPTION),
        )?;
        constraint::optional_range("MaxSessionDuration", self.max_session_duration, 3600, 43200)?;
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
pub struct CreateRoleResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Retrieves a role.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetRoleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
}

impl Validate for GetRoleRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string(
            "RoleName",
            self.role_name.as_deref(),
            1,
            64,
            Some(&patterns::NAME),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetRoleResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Updates a role's description and/or maximum session duration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateRoleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_session_duration: Option<i32>,
}

impl Validate for UpdateRoleRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string(
            "RoleName",
            self.role_name.as_deref(),
            1,
            64,
            Some(&patterns::NAME),
        )?;
        constraint::optional_string(
            "Description",
            self.description.as_deref(),
            0,
            1000,
            Some(&patterns::DESCRIPTION),
        )?;
        constraint::optional_range("MaxSessionDuration", self.max_session_duration, 3600, 43200)
    }
}

/// The service returns an empty body for UpdateRole.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateRoleResult {}

/// Replaces a role's description.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateRoleDescriptionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Validate for UpdateRoleDescriptionRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string(
            "RoleName",
            self.role_name.as_deref(),
            1,
            64,
            Some(&patterns::NAME),
        )?;
        // Required, but the empty string is a legal value.
        constraint::required_string(
            "Description",
            self.description.as_deref(),
            0,
            1000,
            Some(&patterns::DESCRIPTION),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateRoleDescriptionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Deletes a role. The role must have no attached resources left.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteRoleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
}

impl Validate for DeleteRoleRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string(
            "RoleName",
            self.role_name.as_deref(),
            1,
            64,
            Some(&patterns::NAME),
        )
    }
}

/// Lists roles, optionally filtered by path prefix.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListRolesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<i32>,
}

impl Validate for ListRolesRequest {
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
pub struct ListRolesResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<Role>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_truncated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

impl_paginated!(ListRolesResult);

/// Replaces the trust policy of a role.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateAssumeRolePolicyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_document: Option<String>,
}

impl Validate for UpdateAssumeRolePolicyRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string(
            "RoleName",
            self.role_name.as_deref(),
            1,
            64,
            Some(&patterns::NAME),
        )?;
        constraint::required_string(
            "PolicyDocument",
            self.policy_document.as_deref(),
            1,
            131072,
            Some(&patterns::POLICY_DOCUMENT),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRUST_POLICY: &str = r#"{"Version":"2012-10-17","Statement":[]}"#;

    #[test]
    fn test_create_role_requires_trust_policy() {
        let request = CreateRoleRequest {
            role_name: Some("deploy".to_string()),
            ..Default::default()
        };
        assert!(request.validate().is_err());

        let request = CreateRoleRequest {
            role_name: Some("deploy".to_string()),
            assume_role_policy_document: Some(TRUST_POLICY.to_string()),
            ..Default::default()
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_session_duration_range() {
        let mut request = CreateRoleRequest {
            role_name: Some("deploy".to_string()),
            assume_role_policy_document: Some(TRUST_POLICY.to_string()),
            max_session_duration: Some(3600),
            ..Default::default()
        };
        assert!(request.validate().is_ok());

        request.max_session_duration = Some(3599);
        assert!(request.validate().is_err());

        request.max_session_duration = Some(43201);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_update_role_description_requires_description() {
        let request = UpdateRoleDescriptionRequest {
            role_name: Some("deploy".to_string()),
            ..Default::default()
        };
        assert!(request.validate().is_err());

        // Empty description is a legal value; only absence fails.
        let request = UpdateRoleDescriptionRequest {
            role_name: Some("deploy".to_string()),
            description: Some(String::new()),
        };
        assert!(request.validate().is_ok());
    }
}
