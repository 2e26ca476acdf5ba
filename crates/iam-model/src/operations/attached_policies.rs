//! Managed policy attachment operations

use serde::{Deserialize, Serialize};

use iam_types::constraint::{self, patterns};
use iam_types::{Validate, ValidationResult};

use crate::entities::AttachedPolicy;

use super::impl_paginated;

/// Attaches a managed policy to a user.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttachUserPolicyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_arn: Option<String>,
}

impl Validate for AttachUserPolicyRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("UserName", self.user_name.as_deref(), 1, 64, Some(&patterns::NAME))?;
        constraint::required_string("PolicyArn", self.policy_arn.as_deref(), 20, 2048, None)
    }
}

/// Attaches a managed policy to a group.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttachGroupPolicyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_arn: Option<String>,
}

impl Validate for AttachGroupPolicyRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("GroupName", self.group_name.as_deref(), 1, 128, Some(&patterns::NAME))?;
        constraint::required_string("PolicyArn", self.policy_arn.as_deref(), 20, 2048, None)
    }
}

/// Attaches a managed policy to a role.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttachRolePolicyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_arn: Option<String>,
}

impl Validate for AttachRolePolicyRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("RoleName", self.role_name.as_deref(), 1, 64, Some(&patterns::NAME))?;
        constraint::required_string("PolicyArn", self.policy_arn.as_deref(), 20, 2048, None)
    }
}

/// Detaches a managed policy from a user.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetachUserPolicyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_arn: Option<String>,
}

impl Validate for DetachUserPolicyRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("UserName", self.user_name.as_deref(), 1, 64, Some(&patterns::NAME))?;
        constraint::required_string("PolicyArn", self.policy_arn.as_deref(), 20, 2048, None)
    }
}

/// Detaches a managed policy from a group.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetachGroupPolicyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_arn: Option<String>,
}

impl Validate for DetachGroupPolicyRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("GroupName", self.group_name.as_deref(), 1, 128, Some(&patterns::NAME))?;
        constraint::required_string("PolicyArn", self.policy_arn.as_deref(), 20, 2048, None)
    }
}

/// Detaches a managed policy from a role.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetachRolePolicyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_arn: Option<String>,
}

impl Validate for DetachRolePolicyRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("RoleName", self.role_name.as_deref(), 1, 64, Some(&patterns::NAME))?;
        constraint::required_string("PolicyArn", self.policy_arn.as_deref(), 20, 2048, None)
    }
}

/// Lists the managed policies attached to a user.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListAttachedUserPoliciesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<i32>,
}

impl Validate for ListAttachedUserPoliciesRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("UserName", self.user_name.as_deref(), 1, 64, Some(&patterns::NAME))?;
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
pub struct ListAttachedUserPoliciesResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attached_policies: Option<Vec<AttachedPolicy>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_truncated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

/// Lists the managed policies attached to a group.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListAttachedGroupPoliciesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<i32>,
}

impl Validate for ListAttachedGroupPoliciesRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("GroupName", self.group_name.as_deref(), 1, 128, Some(&patterns::NAME))?;
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
pub struct ListAttachedGroupPoliciesResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attached_policies: Option<Vec<AttachedPolicy>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_truncated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

/// Lists the managed policies attached to a role.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListAttachedRolePoliciesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<i32>,
}

impl Validate for ListAttachedRolePoliciesRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("RoleName", self.role_name.as_deref(), 1, 64, Some(&patterns::NAME))?;
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
pub struct ListAttachedRolePoliciesResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attached_policies: Option<Vec<AttachedPolicy>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_truncated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

impl_paginated!(
    ListAttachedUserPoliciesResult,
    ListAttachedGroupPoliciesResult,
    ListAttachedRolePoliciesResult
);

#[cfg(test)]
mod tests {
    use super::*;
    use iam_types::Paginated;

    #[test]
    fn test_attach_requires_both_fields() {
        let request = AttachRolePolicyRequest {
            role_name: Some("deployer".to_string()),
            ..Default::default()
        };
        assert!(request.validate().is_err());

        let request = AttachRolePolicyRequest {
            role_name: Some("deployer".to_string()),
            policy_arn: Some("arn:aws:iam::aws:policy/ReadOnlyAccess".to_string()),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_truncated_list_round_trip() {
        let json = r#"{"AttachedPolicies":[{"PolicyName":"ReadOnlyAccess","PolicyArn":"arn:aws:iam::aws:policy/ReadOnlyAccess"}],"IsTruncated":true,"Marker":"AAAB"}"#;
        let result: ListAttachedUserPoliciesResult = serde_json::from_str(json).unwrap();
        assert!(result.is_truncated());
        assert_eq!(result.marker(), Some("AAAB"));
        assert_eq!(result.attached_policies.as_ref().unwrap().len(), 1);
    }
}
