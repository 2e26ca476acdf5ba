//! Boundary cases for request validation

use iam_model::entities::ContextEntry;
use iam_model::operations::{
    CreateGroupRequest, CreatePolicyRequest, CreateRoleRequest, CreateUserRequest,
    UpdateAccountPasswordPolicyRequest,
};
use iam_types::{Validate, ValidationError};

const TRUST_POLICY: &str = r#"{"Version":"2012-10-17","Statement":[{"Effect":"Allow","Principal":{"Service":"ec2.amazonaws.com"},"Action":"sts:AssumeRole"}]}"#;

#[test]
fn test_user_name_length_boundaries() {
    for (len, ok) in [(1, true), (64, true), (65, false)] {
        let request = CreateUserRequest {
            user_name: Some("a".repeat(len)),
            ..Default::default()
        };
        assert_eq!(request.validate().is_ok(), ok, "length {len}");
    }
}

#[test]
fn test_group_name_allows_wider_limit_than_user() {
    let request = CreateGroupRequest {
        group_name: Some("g".repeat(128)),
        ..Default::default()
    };
    assert!(request.validate().is_ok());

    let request = CreateUserRequest {
        user_name: Some("u".repeat(128)),
        ..Default::default()
    };
    assert!(request.validate().is_err());
}

#[test]
fn test_missing_name_reported_by_field() {
    let err = CreateUserRequest::default().validate().unwrap_err();
    assert_eq!(err, ValidationError::MissingField { field: "UserName".to_string() });
}

#[test]
fn test_role_session_duration_boundaries() {
    for (secs, ok) in [(3599, false), (3600, true), (43200, true), (43201, false)] {
        let request = CreateRoleRequest {
            role_name: Some("deployer".to_string()),
            assume_role_policy_document: Some(TRUST_POLICY.to_string()),
            max_session_duration: Some(secs),
            ..Default::default()
        };
        assert_eq!(request.validate().is_ok(), ok, "duration {secs}");
    }
}

#[test]
fn test_policy_document_upper_bound() {
    let filler = "x".repeat(131072 - 2);
    let request = CreatePolicyRequest {
        policy_name: Some("big".to_string()),
        policy_document: Some(format!("{{{filler}}}")),
        ..Default::default()
    };
    assert!(request.validate().is_ok());

    let request = CreatePolicyRequest {
        policy_name: Some("big".to_string()),
        policy_document: Some("x".repeat(131073)),
        ..Default::default()
    };
    assert!(matches!(
        request.validate().unwrap_err(),
        ValidationError::TooLong { .. }
    ));
}

#[test]
fn test_context_key_name_boundaries() {
    let entry = ContextEntry {
        context_key_name: Some("aws:SourceIp".to_string()),
        ..Default::default()
    };
    assert!(entry.validate().is_ok());

    let entry = ContextEntry {
        context_key_name: Some("k".repeat(257)),
        ..Default::default()
    };
    assert!(entry.validate().is_err());
}

#[test]
fn test_password_policy_boundary_values() {
    let request = UpdateAccountPasswordPolicyRequest {
        minimum_password_length: Some(6),
        max_password_age: Some(1095),
        password_reuse_prevention: Some(1),
        ..Default::default()
    };
    assert!(request.validate().is_ok());

    let request = UpdateAccountPasswordPolicyRequest {
        max_password_age: Some(1096),
        ..Default::default()
    };
    assert_eq!(
        request.validate().unwrap_err(),
        ValidationError::OutOfRange {
            field: "MaxPasswordAge".to_string(),
            value: 1096,
            min: 1,
            max: 1095,
        }
    );
}
