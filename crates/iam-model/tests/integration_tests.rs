//! Fixture-based deserialization tests against service response shapes

use chrono::{TimeZone, Utc};

use iam_model::entities::{EntityInfo, Tag};
use iam_model::operations::{
    GetAccountAuthorizationDetailsResult, GetUserResult, ListUsersResult, SimulatePolicyResponse,
};
use iam_types::{Paginated, PolicyEvaluationDecisionType, PolicySourceType};

#[test]
fn test_get_user_response_fixture() {
    let json = r#"{
        "User": {
            "Path": "/division_abc/subdivision_xyz/",
            "UserName": "Bob",
            "UserId": "AIDACKCEVSQ6C2EXAMPLE",
            "Arn": "arn:aws:iam::123456789012:user/division_abc/subdivision_xyz/Bob",
            "CreateDate": "2012-09-21T23:03:56Z",
            "Tags": [{"Key": "Department", "Value": "Accounting"}]
        }
    }"#;
    let result: GetUserResult = serde_json::from_str(json).unwrap();
    let user = result.user.unwrap();
    assert_eq!(user.user_name.as_deref(), Some("Bob"));
    assert_eq!(user.user_id.as_deref(), Some("AIDACKCEVSQ6C2EXAMPLE"));
    assert_eq!(
        user.create_date,
        Some(Utc.with_ymd_and_hms(2012, 9, 21, 23, 3, 56).unwrap())
    );
    assert_eq!(user.tags, Some(vec![Tag::new("Department", "Accounting")]));
    assert!(user.password_last_used.is_none());
}

#[test]
fn test_paginated_listing_walk() {
    let first: ListUsersResult = serde_json::from_str(
        r#"{"Users":[{"UserName":"alice"}],"IsTruncated":true,"Marker":"AAABBBccc"}"#,
    )
    .unwrap();
    assert!(first.is_truncated());
    let marker = first.marker().map(str::to_string);
    assert_eq!(marker.as_deref(), Some("AAABBBccc"));

    let last: ListUsersResult =
        serde_json::from_str(r#"{"Users":[{"UserName":"bob"}],"IsTruncated":false}"#).unwrap();
    assert!(!last.is_truncated());
    assert!(last.marker().is_none());
}

#[test]
fn test_simulation_response_fixture() {
    let json = r#"{
        "EvaluationResults": [{
            "EvalActionName": "s3:GetObject",
            "EvalResourceName": "arn:aws:s3:::my-bucket/key",
            "EvalDecision": "implicitDeny",
            "MatchedStatements": [{
                "SourcePolicyId": "PolicyInputList.1",
                "SourcePolicyType": "user-managed",
                "StartPosition": {"Line": 3, "Column": 17},
                "EndPosition": {"Line": 9, "Column": 6}
            }],
            "MissingContextValues": ["aws:SourceIp"]
        }],
        "IsTruncated": false
    }"#;
    let response: SimulatePolicyResponse = serde_json::from_str(json).unwrap();
    let results = response.evaluation_results.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(
        results[0].eval_decision,
        Some(PolicyEvaluationDecisionType::ImplicitDeny)
    );
    let statements = results[0].matched_statements.as_ref().unwrap();
    assert_eq!(
        statements[0].source_policy_type,
        Some(PolicySourceType::UserManaged)
    );
    assert_eq!(statements[0].start_position.as_ref().unwrap().line, Some(3));
    assert_eq!(
        results[0].missing_context_values,
        Some(vec!["aws:SourceIp".to_string()])
    );
}

#[test]
fn test_authorization_details_fixture() {
    let json = r#"{
        "UserDetailList": [{
            "UserName": "alice",
            "GroupList": ["admins"],
            "AttachedManagedPolicies": [{
                "PolicyName": "ReadOnlyAccess",
                "PolicyArn": "arn:aws:iam::aws:policy/ReadOnlyAccess"
            }]
        }],
        "RoleDetailList": [{
            "RoleName": "deployer",
            "AssumeRolePolicyDocument": "%7B%22Version%22%3A%222012-10-17%22%7D"
        }],
        "Policies": [{
            "PolicyName": "ReadOnlyAccess",
            "DefaultVersionId": "v2",
            "AttachmentCount": 1
        }],
        "IsTruncated": false
    }"#;
    let result: GetAccountAuthorizationDetailsResult = serde_json::from_str(json).unwrap();
    let users = result.user_detail_list.unwrap();
    assert_eq!(users[0].group_list, Some(vec!["admins".to_string()]));
    let policies = result.policies.unwrap();
    assert_eq!(policies[0].default_version_id.as_deref(), Some("v2"));
    assert_eq!(policies[0].attachment_count, Some(1));
    assert!(result.group_detail_list.is_none());
}

#[test]
fn test_entity_info_type_field_rename() {
    let json = r#"{"Arn":"arn:aws:iam::123456789012:role/deployer","Name":"deployer","Type":"ROLE","Id":"AROA1234567890EXAMPLE"}"#;
    let info: EntityInfo = serde_json::from_str(json).unwrap();
    assert_eq!(info.name.as_deref(), Some("deployer"));
    let back = serde_json::to_value(&info).unwrap();
    assert_eq!(back["Type"], "ROLE");
}
