//! Policy simulator value objects

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use iam_types::constraint::{self, patterns};
use iam_types::{
    ContextKeyTypeEnum, PolicyEvaluationDecisionType, PolicySourceType, ValidationResult,
};

/// A condition context key/value pair supplied to a simulation, standing
/// in for the request context a real call would carry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContextEntry {
    /// Full context key name, e.g. `aws:CurrentTime`. 5-256 chars.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_key_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_key_values: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_key_type: Option<ContextKeyTypeEnum>,
}

impl ContextEntry {
    pub fn new(
        name: impl Into<String>,
        key_type: ContextKeyTypeEnum,
        values: Vec<String>,
    ) -> Self {
        Self {
            context_key_name: Some(name.into()),
            context_key_values: Some(values),
            context_key_type: Some(key_type),
        }
    }

    pub fn validate(&self) -> ValidationResult<()> {
        constraint::optional_string(
            "ContextKeyName",
            self.context_key_name.as_deref(),
            5,
            256,
            None,
        )
    }
}

/// Row/column position of a statement inside a policy document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Position {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<i32>,
}

/// A policy statement that contributed to a simulation decision, with its
/// location in the source document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Statement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_policy_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_policy_type: Option<PolicySourceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_position: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_position: Option<Position>,
}

/// Whether the simulated account's Organizations service control
/// policies allowed the action.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrganizationsDecisionDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_by_organizations: Option<bool>,
}

/// Whether the permissions boundary allowed the action.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PermissionsBoundaryDecisionDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_by_permissions_boundary: Option<bool>,
}

/// The simulator's verdict for one action, aggregated across the
/// supplied resources.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EvaluationResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eval_action_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eval_resource_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eval_decision: Option<PolicyEvaluationDecisionType>,
    /// Statements that produced the decision. For an implicit deny this
    /// list is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_statements: Option<Vec<Statement>>,
    /// Context keys the policies referenced but the request did not
    /// supply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_context_values: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizations_decision_detail: Option<OrganizationsDecisionDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions_boundary_decision_detail: Option<PermissionsBoundaryDecisionDetail>,
    /// Additional decision details keyed by a service-defined label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eval_decision_details: Option<HashMap<String, PolicyEvaluationDecisionType>>,
    /// Per-resource verdicts, present when resource ARNs were supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_specific_results: Option<Vec<ResourceSpecificResult>>,
}

/// The simulator's verdict for one action on one specific resource.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceSpecificResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eval_resource_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eval_resource_decision: Option<PolicyEvaluationDecisionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_statements: Option<Vec<Statement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_context_values: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eval_decision_details: Option<HashMap<String, PolicyEvaluationDecisionType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions_boundary_decision_detail: Option<PermissionsBoundaryDecisionDetail>,
}

/// Checks a simulation policy input list against the policy document
/// constraints.
pub fn validate_policy_input_list(
    field: &'static str,
    policies: Option<&[String]>,
) -> ValidationResult<()> {
    constraint::string_list(field, policies, 1, 131072, Some(&patterns::POLICY_DOCUMENT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_entry_new() {
        let entry = ContextEntry::new(
            "aws:CurrentTime",
            ContextKeyTypeEnum::Date,
            vec!["2018-01-01T00:00:00Z".to_string()],
        );
        assert_eq!(entry.context_key_name.as_deref(), Some("aws:CurrentTime"));
        assert_eq!(entry.context_key_type, Some(ContextKeyTypeEnum::Date));
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn test_context_key_name_too_short() {
        let entry = ContextEntry::new("a:b", ContextKeyTypeEnum::String, vec![]);
        assert!(entry.validate().is_err());
    }

    #[test]
    fn test_decision_details_wire_values() {
        let result = EvaluationResult {
            eval_action_name: Some("s3:GetObject".to_string()),
            eval_decision: Some(PolicyEvaluationDecisionType::ImplicitDeny),
            ..Default::default()
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["EvalDecision"], "implicitDeny");
    }
}
