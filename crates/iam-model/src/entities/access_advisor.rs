//! Access-advisor detail objects
//!
//! Shapes shared by the service-last-accessed reports and the
//! organizations access report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use iam_types::{PolicyOwnerEntityType, PolicyType};

/// One service's access summary inside an organizations access report.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccessDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    /// Namespace used in policy actions, e.g. `s3`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Path of the Organizations entity the report was generated for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_authenticated_time: Option<DateTime<Utc>>,
    /// Number of accounts with authenticated principals for the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_authenticated_entities: Option<i32>,
}

/// One service's access summary for an IAM entity.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceLastAccessed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_authenticated: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_namespace: Option<String>,
    /// ARN of the entity that most recently authenticated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_authenticated_entity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_authenticated_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_authenticated_entities: Option<i32>,
    /// Present only for ACTION_LEVEL reports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracked_actions_last_accessed: Option<Vec<TrackedActionLastAccessed>>,
}

/// Last-accessed data for a single tracked action.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrackedActionLastAccessed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_accessed_entity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_accessed_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_accessed_region: Option<String>,
}

/// Identity of an IAM entity in a report.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EntityInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<PolicyOwnerEntityType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// An entity plus when it last authenticated to the service in question.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EntityDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_info: Option<EntityInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_authenticated: Option<DateTime<Utc>>,
}

/// Why a report job failed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// The policies granting an entity access to one service namespace.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListPoliciesGrantingServiceAccessEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policies: Option<Vec<PolicyGrantingServiceAccess>>,
}

/// One policy that grants access to a service, with the entity it is
/// attached to when inline.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyGrantingServiceAccess {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_type: Option<PolicyType>,
    /// Present only for managed policies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_arn: Option<String>,
    /// Present only for inline policies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<PolicyOwnerEntityType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,
}

/// Why a service-linked role deletion failed, with the resources that
/// still use the role.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeletionTaskFailureReasonType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_usage_list: Option<Vec<RoleUsageType>>,
}

/// Resources in one region still using a service-linked role.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RoleUsageType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_info_type_wire_name() {
        let info = EntityInfo {
            arn: Some("arn:aws:iam::123456789012:user/alice".to_string()),
            entity_type: Some(PolicyOwnerEntityType::User),
            ..Default::default()
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["Type"], "USER");
    }

    #[test]
    fn test_policy_granting_access_inline_fields() {
        let policy = PolicyGrantingServiceAccess {
            policy_name: Some("inline-s3".to_string()),
            policy_type: Some(PolicyType::Inline),
            entity_type: Some(PolicyOwnerEntityType::Group),
            entity_name: Some("devs".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&policy).unwrap();
        assert_eq!(json["PolicyType"], "INLINE");
        assert_eq!(json["EntityType"], "GROUP");
        assert!(json.get("PolicyArn").is_none());
    }
}
