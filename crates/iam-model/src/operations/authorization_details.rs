//! Account authorization details snapshot

use serde::{Deserialize, Serialize};

use iam_types::constraint;
use iam_types::{EntityType, Validate, ValidationResult};

use crate::entities::{GroupDetail, ManagedPolicyDetail, RoleDetail, UserDetail};

use super::impl_paginated;

/// Retrieves a snapshot of all users, groups, roles, and policies in
/// the account, including how they relate to one another.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetAccountAuthorizationDetailsRequest {
    /// Restricts the snapshot to the named entity kinds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Vec<EntityType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

impl Validate for GetAccountAuthorizationDetailsRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::pagination(self.marker.as_deref(), self.max_items)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetAccountAuthorizationDetailsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_detail_list: Option<Vec<UserDetail>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_detail_list: Option<Vec<GroupDetail>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_detail_list: Option<Vec<RoleDetail>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policies: Option<Vec<ManagedPolicyDetail>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_truncated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

impl_paginated!(GetAccountAuthorizationDetailsResult);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_wire_strings() {
        let request = GetAccountAuthorizationDetailsRequest {
            filter: Some(vec![EntityType::User, EntityType::AwsManagedPolicy]),
            ..Default::default()
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["Filter"][0], "User");
        assert_eq!(json["Filter"][1], "AWSManagedPolicy");
    }

    #[test]
    fn test_snapshot_round_trip() {
        let json = r#"{"UserDetailList":[],"GroupDetailList":[],"RoleDetailList":[],"Policies":[],"IsTruncated":false}"#;
        let result: GetAccountAuthorizationDetailsResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.policies, Some(vec![]));
        assert_eq!(serde_json::to_string(&result).unwrap(), json);
    }
}
