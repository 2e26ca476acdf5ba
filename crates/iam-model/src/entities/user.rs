//! User identities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::policy::{AttachedPermissionsBoundary, AttachedPolicy, PolicyDetail};
use super::tag::Tag;

/// An IAM user.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    /// The path to the user, e.g. `/division_abc/`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// The friendly name identifying the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// The stable, unique identifier, e.g. `AIDACKCEVSQ6C2EXAMPLE`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<DateTime<Utc>>,
    /// When the user's password was last used to sign in. Absent for users
    /// with no password or no recorded sign-in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_last_used: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions_boundary: Option<AttachedPermissionsBoundary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

/// A user together with its group memberships and policies, as reported
/// by GetAccountAuthorizationDetails.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<DateTime<Utc>>,
    /// Inline policies embedded in the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_policy_list: Option<Vec<PolicyDetail>>,
    /// Names of the groups the user belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_list: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attached_managed_policies: Option<Vec<AttachedPolicy>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions_boundary: Option<AttachedPermissionsBoundary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_user_is_all_none() {
        let user = User::default();
        assert!(user.path.is_none());
        assert!(user.user_name.is_none());
        assert!(user.user_id.is_none());
        assert!(user.arn.is_none());
        assert!(user.create_date.is_none());
        assert!(user.password_last_used.is_none());
        assert!(user.permissions_boundary.is_none());
        assert!(user.tags.is_none());
    }

    #[test]
    fn test_none_fields_absent_from_wire() {
        let user = User {
            user_name: Some("alice".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(json, r#"{"UserName":"alice"}"#);
    }

    #[test]
    fn test_field_change_breaks_equality() {
        let a = User { user_name: Some("alice".to_string()), ..Default::default() };
        let mut b = a.clone();
        assert_eq!(a, b);
        b.user_id = Some("AIDACKCEVSQ6C2EXAMPLE".to_string());
        assert_ne!(a, b);
    }
}
