//! Inline policy operations for users, groups, and roles

use serde::{Deserialize, Serialize};

use iam_types::constraint::{self, patterns};
use iam_types::{Validate, ValidationResult};

use super::impl_paginated;

/// Adds or replaces an inline policy embedded in a user.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutUserPolicyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_document: Option<String>,
}

impl Validate for PutUserPolicyRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("UserName", self.user_name.as_deref(), 1, 64, Some(&patterns::NAME))?;
        constraint::required_string("PolicyName", self.policy_name.as_deref(), 1, 128, Some(&patterns::NAME))?;
        constraint::required_string(
            "PolicyDocument",
            self.policy_document.as_deref(),
            1,
            131072,
            Some(&patterns::POLICY_DOCUMENT),
        )
    }
}

/// Adds or replaces an inline policy embedded in a group.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutGroupPolicyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_document: Option<String>,
}

impl Validate for PutGroupPolicyRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("GroupName", self.group_name.as_deref(), 1, 128, Some(&patterns::NAME))?;
        constraint::required_string("PolicyName", self.policy_name.as_deref(), 1, 128, Some(&patterns::NAME))?;
        constraint::required_string(
            "PolicyDocument",
            self.policy_document.as_deref(),
            1,
            131072,
            Some(&patterns::POLICY_DOCUMENT),
        )
    }
}

/// Adds or replaces an inline policy embedded in a role.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutRolePolicyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_document: Option<String>,
}

impl Validate for PutRolePolicyRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("RoleName", self.role_name.as_deref(), 1, 64, Some(&patterns::NAME))?;
        constraint::required_string("PolicyName", self.policy_name.as_deref(), 1, 128, Some(&patterns::NAME))?;
        constraint::required_string(
            "PolicyDocument",
            self.policy_document.as_deref(),
            1,
            131072,
            Some(&patterns::POLICY_DOCUMENT),
        )
    }
}

/// Retrieves an inline policy embedded in a user. The returned
/// document is URL-encoded per RFC 3986.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetUserPolicyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_name: Option<String>,
}

impl Validate for GetUserPolicyRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("UserName", self.user_name.as_deref(), 1, 64, Some(&patterns::NAME))?;
        constraint::required_string("PolicyName", self.policy_name.as_deref(), 1, 128, Some(&patterns::NAME))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetUserPolicyResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_document: Option<String>,
}

/// Retrieves an inline policy embedded in a group.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetGroupPolicyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_name: Option<String>,
}

impl Validate for GetGroupPolicyRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("GroupName", self.group_name.as_deref(), 1, 128, Some(&patterns::NAME))?;
        constraint::required_string("PolicyName", self.policy_name.as_deref(), 1, 128, Some(&patterns::NAME))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetGroupPolicyResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_document: Option<String>,
}

/// Retrieves an inline policy embedded in a role.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetRolePolicyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_name: Option<String>,
}

impl Validate for GetRolePolicyRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("RoleName", self.role_name.as_deref(), 1, 64, Some(&patterns::NAME))?;
        constraint::required_string("PolicyName", self.policy_name.as_deref(), 1, 128, Some(&patterns::NAME))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetRolePolicyResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_document: Option<String>,
}

/// Deletes an inline policy embedded in a user.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteUserPolicyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_name: Option<String>,
}

impl Validate for DeleteUserPolicyRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("UserName", self.user_name.as_deref(), 1, 64, Some(&patterns::NAME))?;
        constraint::required_string("PolicyName", self.policy_name.as_deref(), 1, 128, Some(&patterns::NAME))
    }
}

/// Deletes an inline policy embedded in a group.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteGroupPolicyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_name: Option<String>,
}

impl Validate for DeleteGroupPolicyRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("GroupName", self.group_name.as_deref(), 1, 128, Some(&patterns::NAME))?;
        constraint::required_string("PolicyName", self.policy_name.as_deref(), 1, 128, Some(&patterns::NAME))
    }
}

/// Deletes an inline policy embedded in a role.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteRolePolicyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_name: Option<String>,
}

impl Validate for DeleteRolePolicyRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("RoleName", self.role_name.as_deref(), 1, 64, Some(&patterns::NAME))?;
        constraint::required_string("PolicyName", self.policy_name.as_deref(), 1, 128, Some(&patterns::NAME))
    }
}

/// Lists the names of the inline policies embedded in a user.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListUserPoliciesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<i32>,
}

impl Validate for ListUserPoliciesRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("UserName", self.user_name.as_deref(), 1, 64, Some(&patterns::NAME))?;
        constraint::pagination(self.marker.as_deref(), self.max_items)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListUserPoliciesResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_truncated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

/// Lists the names of the inline policies embedded in a group.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListGroupPoliciesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<i32>,
}

impl Validate for ListGroupPoliciesRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("GroupName", self.group_name.as_deref(), 1, 128, Some(&patterns::NAME))?;
        constraint::pagination(self.marker.as_deref(), self.max_items)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListGroupPoliciesResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_truncated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

/// Lists the names of the inline policies embedded in a role.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListRolePoliciesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<i32>,
}

impl Validate for ListRolePoliciesRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("RoleName", self.role_name.as_deref(), 1, 64, Some(&patterns::NAME))?;
        constraint::pagination(self.marker.as_deref(), self.max_items)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListRolePoliciesResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_truncated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

impl_paginated!(ListUserPoliciesResult, ListGroupPoliciesResult, ListRolePoliciesResult);

#[cfg(test)]
mod tests {
    use super::*;
    use iam_types::{Paginated, ValidationError};

    #[test]
    fn test_put_user_policy_rejects_control_chars() {
        let request = PutUserPolicyRequest {
            user_name: Some("alice".to_string()),
            policy_name: Some("inline-1".to_string()),
            policy_document: Some("{\"Version\"\u{0001}}".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            request.validate().unwrap_err(),
            ValidationError::PatternMismatch { .. }
        ));
    }

    #[test]
    fn test_list_role_policies_truncation_default() {
        let result = ListRolePoliciesResult {
            policy_names: Some(vec!["trust-audit".to_string()]),
            ..Default::default()
        };
        assert!(!result.is_truncated());
        assert_eq!(result.marker(), None);
    }

    #[test]
    fn test_get_group_policy_wire_shape() {
        let result = GetGroupPolicyResult {
            group_name: Some("admins".to_string()),
            policy_name: Some("inline-1".to_string()),
            policy_document: Some("{}".to_string()),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["GroupName"], "admins");
        assert_eq!(json["PolicyDocument"], "{}");
    }
}
