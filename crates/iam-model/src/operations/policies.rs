//! Managed policy operations

use serde::{Deserialize, Serialize};

use iam_types::constraint::{self, patterns};
use iam_types::{EntityType, PolicyScopeType, PolicyUsageType, Validate, ValidationResult};

use crate::entities::{
    validate_tags, Policy, PolicyGroup, PolicyRole, PolicyUser, PolicyVersion, Tag,
};

use super::impl_paginated;

/// Creates a new managed policy. The document becomes version `v1` and
/// the default version.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatePolicyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_document: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl Validate for CreatePolicyRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string(
            "PolicyName",
            self.policy_name.as_deref(),
            1,
            128,
            Some(&patterns::NAME),
        )?;
        constraint::optional_string(
            "Path",
            self.path.as_deref(),
            1,
            512,
            Some(&patterns::PATH),
        )?;
        constraint::required_string(
            "PolicyDocument",
            self.policy_document.as_deref(),
            1,
            131072,
            Some(&patterns::POLICY_DOCUMENT),
        )?;
        constraint::optional_string("Description", self.description.as_deref(), 0, 1000, None)?;
        validate_tags(self.tags.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatePolicyResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<Policy>,
}

/// Retrieves a managed policy's metadata. The document lives on the
/// version, fetched via GetPolicyVersion.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPolicyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_arn: Option<String>,
}

impl Validate for GetPolicyRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("PolicyArn", self.policy_arn.as_deref(), 20, 2048, None)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPolicyResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<Policy>,
}

/// Deletes a managed policy. All non-default versions must be deleted
/// first and the policy must be detached everywhere.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeletePolicyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_arn: Option<String>,
}

impl Validate for DeletePolicyRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("PolicyArn", self.policy_arn.as_deref(), 20, 2048, None)
    }
}

/// Lists managed policies with scope and usage filters.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListPoliciesRequest {
    /// `All`, `AWS` (AWS managed only), or `Local` (customer managed
    /// only). Defaults to `All` on the service side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<PolicyScopeType>,
    /// When true, only policies attached to at least one entity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_attached: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_usage_filter: Option<PolicyUsageType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<i32>,
}

impl Validate for ListPoliciesRequest {
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
pub struct ListPoliciesResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policies: Option<Vec<Policy>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_truncated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

/// Adds a new version to a managed policy. A policy holds at most five
/// versions; delete one before adding a sixth.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatePolicyVersionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_document: Option<String>,
    /// When true, the new version becomes the default immediately.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_as_default: Option<bool>,
}

impl Validate for CreatePolicyVersionRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("PolicyArn", self.policy_arn.as_deref(), 20, 2048, None)?;
        constraint::required_string(
            "PolicyDocument",
            self.policy_document.as_deref(),
            1,
            131072,
            Some(&patterns::POLICY_DOCUMENT),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatePolicyVersionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_version: Option<PolicyVersion>,
}

/// Retrieves one version of a managed policy, including its document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPolicyVersionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_id: Option<String>,
}

impl Validate for GetPolicyVersionRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("PolicyArn", self.policy_arn.as_deref(), 20, 2048, None)?;
        constraint::required_string(
            "VersionId",
            self.version_id.as_deref(),
            1,
            128,
            Some(&patterns::POLICY_VERSION),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPolicyVersionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_version: Option<PolicyVersion>,
}

/// Deletes one non-default version of a managed policy.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeletePolicyVersionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_id: Option<String>,
}

impl Validate for DeletePolicyVersionRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("PolicyArn", self.policy_arn.as_deref(), 20, 2048, None)?;
        constraint::required_string(
            "VersionId",
            self.version_id.as_deref(),
            1,
            128,
            Some(&patterns::POLICY_VERSION),
        )
    }
}

/// Lists the versions of a managed policy.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListPolicyVersionsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<i32>,
}

impl Validate for ListPolicyVersionsRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("PolicyArn", self.policy_arn.as_deref(), 20, 2048, None)?;
        constraint::pagination(self.marker.as_deref(), self.max_items)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListPolicyVersionsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub versions: Option<Vec<PolicyVersion>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_truncated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

/// Sets the version served when the policy is attached.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SetDefaultPolicyVersionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_id: Option<String>,
}

impl Validate for SetDefaultPolicyVersionRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("PolicyArn", self.policy_arn.as_deref(), 20, 2048, None)?;
        constraint::required_string(
            "VersionId",
            self.version_id.as_deref(),
            1,
            128,
            Some(&patterns::POLICY_VERSION),
        )
    }
}

/// Lists the users, groups, and roles a managed policy is attached to.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListEntitiesForPolicyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_filter: Option<EntityType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_usage_filter: Option<PolicyUsageType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<i32>,
}

impl Validate for ListEntitiesForPolicyRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("PolicyArn", self.policy_arn.as_deref(), 20, 2048, None)?;
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
pub struct ListEntitiesForPolicyResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_groups: Option<Vec<PolicyGroup>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_users: Option<Vec<PolicyUser>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_roles: Option<Vec<PolicyRole>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_truncated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

impl_paginated!(ListPoliciesResult, ListPolicyVersionsResult, ListEntitiesForPolicyResult);

#[cfg(test)]
mod tests {
    use super::*;
    use iam_types::ValidationError;

    const POLICY_ARN: &str = "arn:aws:iam::123456789012:policy/ReadOnly";
    const DOCUMENT: &str = r#"{"Version":"2012-10-17","Statement":[]}"#;

    #[test]
    fn test_create_policy_requires_name_and_document() {
        let request = CreatePolicyRequest {
            policy_name: Some("ReadOnly".to_string()),
            policy_document: Some(DOCUMENT.to_string()),
            ..Default::default()
        };
        assert!(request.validate().is_ok());

        let request = CreatePolicyRequest {
            policy_name: Some("ReadOnly".to_string()),
            ..Default::default()
        };
        assert_eq!(
            request.validate().unwrap_err(),
            ValidationError::MissingField { field: "PolicyDocument".to_string() }
        );
    }

    #[test]
    fn test_version_id_pattern() {
        let mut request = GetPolicyVersionRequest {
            policy_arn: Some(POLICY_ARN.to_string()),
            version_id: Some("v1".to_string()),
        };
        assert!(request.validate().is_ok());

        request.version_id = Some("v12.beta-2".to_string());
        assert!(request.validate().is_ok());

        request.version_id = Some("v0".to_string());
        assert!(request.validate().is_err());

        request.version_id = Some("1".to_string());
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_short_arn_rejected() {
        let request = GetPolicyRequest { policy_arn: Some("arn:aws".to_string()) };
        assert!(matches!(
            request.validate().unwrap_err(),
            ValidationError::TooShort { .. }
        ));
    }

    #[test]
    fn test_list_policies_scope_wire_string() {
        let request = ListPoliciesRequest {
            scope: Some(PolicyScopeType::Aws),
            only_attached: Some(true),
            ..Default::default()
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["Scope"], "AWS");
        assert_eq!(json["OnlyAttached"], true);
    }
}
