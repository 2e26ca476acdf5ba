//! Policy simulation operations

use serde::{Deserialize, Serialize};

use iam_types::constraint::{self, patterns};
use iam_types::{Validate, ValidationError, ValidationResult};

use crate::entities::{validate_policy_input_list, ContextEntry, EvaluationResult};

use super::impl_paginated;

fn validate_action_names(values: Option<&[String]>) -> ValidationResult<()> {
    let actions = values.ok_or_else(|| ValidationError::MissingField {
        field: "ActionNames".to_string(),
    })?;
    for action in actions {
        constraint::required_string("ActionNames", Some(action), 3, 128, None)?;
    }
    Ok(())
}

fn validate_resource_arns(values: Option<&[String]>) -> ValidationResult<()> {
    constraint::string_list("ResourceArns", values, 1, 2048, None)
}

fn validate_context_entries(entries: Option<&[ContextEntry]>) -> ValidationResult<()> {
    if let Some(entries) = entries {
        for entry in entries {
            entry.validate()?;
        }
    }
    Ok(())
}

/// Simulates a set of candidate policies against a list of actions and
/// resources, without touching any live identity.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SimulateCustomPolicyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_input_list: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions_boundary_policy_input_list: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_policy: Option<String>,
    /// Account ID that owns the simulated resources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caller_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_entries: Option<Vec<ContextEntry>>,
    /// EC2 scenario selector, such as `EC2-VPC-InstanceStore`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_handling_option: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<i32>,
}

impl Validate for SimulateCustomPolicyRequest {
    fn validate(&self) -> ValidationResult<()> {
        let policies = self.policy_input_list.as_deref().ok_or_else(|| {
            ValidationError::MissingField { field: "PolicyInputList".to_string() }
        })?;
        validate_policy_input_list("PolicyInputList", Some(policies))?;
        validate_policy_input_list(
            "PermissionsBoundaryPolicyInputList",
            self.permissions_boundary_policy_input_list.as_deref(),
        )?;
        validate_action_names(self.action_names.as_deref())?;
        validate_resource_arns(self.resource_arns.as_deref())?;
        constraint::optional_string(
            "ResourcePolicy",
            self.resource_policy.as_deref(),
            1,
            131072,
            Some(&patterns::POLICY_DOCUMENT),
        )?;
        constraint::optional_string("ResourceOwner", self.resource_owner.as_deref(), 1, 2048, None)?;
        constraint::optional_string("CallerArn", self.caller_arn.as_deref(), 1, 2048, None)?;
        validate_context_entries(self.context_entries.as_deref())?;
        constraint::optional_string(
            "ResourceHandlingOption",
            self.resource_handling_option.as_deref(),
            1,
            64,
            None,
        )?;
        constraint::pagination(self.marker.as_deref(), self.max_items)
    }
}

/// Simulates the policies attached to an existing user, group, or
/// role, optionally combined with extra candidate policies.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SimulatePrincipalPolicyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_source_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_input_list: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions_boundary_policy_input_list: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_owner: Option<String>,
    /// Defaults to the source principal when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caller_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_entries: Option<Vec<ContextEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_handling_option: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<i32>,
}

impl Validate for SimulatePrincipalPolicyRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string(
            "PolicySourceArn",
            self.policy_source_arn.as_deref(),
            20,
            2048,
            None,
        )?;
        validate_policy_input_list("PolicyInputList", self.policy_input_list.as_deref())?;
        validate_policy_input_list(
            "PermissionsBoundaryPolicyInputList",
            self.permissions_boundary_policy_input_list.as_deref(),
        )?;
        validate_action_names(self.action_names.as_deref())?;
        validate_resource_arns(self.resource_arns.as_deref())?;
        constraint::optional_string(
            "ResourcePolicy",
            self.resource_policy.as_deref(),
            1,
            131072,
            Some(&patterns::POLICY_DOCUMENT),
        )?;
        constraint::optional_string("ResourceOwner", self.resource_owner.as_deref(), 1, 2048, None)?;
        constraint::optional_string("CallerArn", self.caller_arn.as_deref(), 1, 2048, None)?;
        validate_context_entries(self.context_entries.as_deref())?;
        constraint::optional_string(
            "ResourceHandlingOption",
            self.resource_handling_option.as_deref(),
            1,
            64,
            None,
        )?;
        constraint::pagination(self.marker.as_deref(), self.max_items)
    }
}

/// Shared response shape for both simulation calls.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SimulatePolicyResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation_results: Option<Vec<EvaluationResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_truncated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

/// Extracts the condition context keys referenced by a set of
/// candidate policies.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetContextKeysForCustomPolicyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_input_list: Option<Vec<String>>,
}

impl Validate for GetContextKeysForCustomPolicyRequest {
    fn validate(&self) -> ValidationResult<()> {
        let policies = self.policy_input_list.as_deref().ok_or_else(|| {
            ValidationError::MissingField { field: "PolicyInputList".to_string() }
        })?;
        validate_policy_input_list("PolicyInputList", Some(policies))
    }
}

/// Extracts the condition context keys referenced by the policies
/// attached to a principal.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetContextKeysForPrincipalPolicyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_source_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_input_list: Option<Vec<String>>,
}

impl Validate for GetContextKeysForPrincipalPolicyRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string(
            "PolicySourceArn",
            self.policy_source_arn.as_deref(),
            20,
            2048,
            None,
        )?;
        validate_policy_input_list("PolicyInputList", self.policy_input_list.as_deref())
    }
}

/// Shared response shape for both context-key calls.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetContextKeysForPolicyResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_key_names: Option<Vec<String>>,
}

impl_paginated!(SimulatePolicyResponse);

#[cfg(test)]
mod tests {
    use super::*;

    const POLICY: &str = r#"{"Version":"2012-10-17","Statement":[{"Effect":"Allow","Action":"s3:GetObject","Resource":"*"}]}"#;

    #[test]
    fn test_custom_simulation_requires_policies_and_actions() {
        let request = SimulateCustomPolicyRequest {
            action_names: Some(vec!["s3:GetObject".to_string()]),
            ..Default::default()
        };
        assert_eq!(
            request.validate().unwrap_err(),
            ValidationError::MissingField { field: "PolicyInputList".to_string() }
        );

        let request = SimulateCustomPolicyRequest {
            policy_input_list: Some(vec![POLICY.to_string()]),
            ..Default::default()
        };
        assert_eq!(
            request.validate().unwrap_err(),
            ValidationError::MissingField { field: "ActionNames".to_string() }
        );

        let request = SimulateCustomPolicyRequest {
            policy_input_list: Some(vec![POLICY.to_string()]),
            action_names: Some(vec!["s3:GetObject".to_string()]),
            ..Default::default()
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_principal_simulation_policies_optional() {
        let request = SimulatePrincipalPolicyRequest {
            policy_source_arn: Some("arn:aws:iam::123456789012:user/alice".to_string()),
            action_names: Some(vec!["iam:ListUsers".to_string()]),
            ..Default::default()
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_short_action_name_rejected() {
        let request = SimulateCustomPolicyRequest {
            policy_input_list: Some(vec![POLICY.to_string()]),
            action_names: Some(vec!["s3".to_string()]),
            ..Default::default()
        };
        assert!(matches!(
            request.validate().unwrap_err(),
            ValidationError::TooShort { .. }
        ));
    }

    #[test]
    fn test_context_entries_are_checked() {
        let request = SimulateCustomPolicyRequest {
            policy_input_list: Some(vec![POLICY.to_string()]),
            action_names: Some(vec!["s3:GetObject".to_string()]),
            context_entries: Some(vec![ContextEntry {
                context_key_name: Some("aws".to_string()),
                ..Default::default()
            }]),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }
}
