//! Permissions boundary operations

use serde::{Deserialize, Serialize};

use iam_types::constraint::{self, patterns};
use iam_types::{Validate, ValidationResult};

/// Sets the managed policy used as a user's permissions boundary.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutUserPermissionsBoundaryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions_boundary: Option<String>,
}

impl Validate for PutUserPermissionsBoundaryRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("UserName", self.user_name.as_deref(), 1, 64, Some(&patterns::NAME))?;
        constraint::required_string(
            "PermissionsBoundary",
            self.permissions_boundary.as_deref(),
            20,
            2048,
            None,
        )
    }
}

/// Sets the managed policy used as a role's permissions boundary.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutRolePermissionsBoundaryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions_boundary: Option<String>,
}

impl Validate for PutRolePermissionsBoundaryRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("RoleName", self.role_name.as_deref(), 1, 64, Some(&patterns::NAME))?;
        constraint::required_string(
            "PermissionsBoundary",
            self.permissions_boundary.as_deref(),
            20,
            2048,
            None,
        )
    }
}

/// Removes a user's permissions boundary.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteUserPermissionsBoundaryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

impl Validate for DeleteUserPermissionsBoundaryRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("UserName", self.user_name.as_deref(), 1, 64, Some(&patterns::NAME))
    }
}

/// Removes a role's permissions boundary.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteRolePermissionsBoundaryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
}

impl Validate for DeleteRolePermissionsBoundaryRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("RoleName", self.role_name.as_deref(), 1, 64, Some(&patterns::NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_arn_length_bounds() {
        let mut request = PutUserPermissionsBoundaryRequest {
            user_name: Some("alice".to_string()),
            permissions_boundary: Some("arn:aws:iam::123456789012:policy/Boundary".to_string()),
        };
        assert!(request.validate().is_ok());

        request.permissions_boundary = Some("arn:short".to_string());
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_delete_serializes_single_field() {
        let request = DeleteRolePermissionsBoundaryRequest {
            role_name: Some("deployer".to_string()),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"RoleName":"deployer"}"#);
    }
}
