//! Validation properties across the request surface

use proptest::prelude::*;

use iam_model::operations::{
    CreateAccountAliasRequest, CreateGroupRequest, CreateUserRequest, DeleteAccessKeyRequest,
    PutUserPolicyRequest,
};
use iam_types::{Validate, ValidationError};

fn valid_name() -> impl Strategy<Value = String> {
    "[A-Za-z0-9+=,.@_-]{1,64}"
}

proptest! {
    /// Every name drawn from the published character set validates.
    #[test]
    fn prop_valid_names_accepted(name in valid_name()) {
        let request = CreateUserRequest {
            user_name: Some(name),
            ..Default::default()
        };
        prop_assert!(request.validate().is_ok());
    }

    /// A name containing any character outside the published set fails
    /// with a pattern error, not a panic.
    #[test]
    fn prop_invalid_character_rejected(prefix in "[A-Za-z]{1,10}", bad in "[ !#$%^&*()\\[\\]{}:;'\"<>?/|\\\\]") {
        let request = CreateGroupRequest {
            group_name: Some(format!("{prefix}{bad}")),
            ..Default::default()
        };
        let err = request.validate().unwrap_err();
        prop_assert!(matches!(err, ValidationError::PatternMismatch { .. }), "{:?}", err);
    }

    /// Validation reports the offending field name.
    #[test]
    fn prop_error_names_the_field(name in valid_name()) {
        let request = PutUserPolicyRequest {
            user_name: Some(name),
            ..Default::default()
        };
        prop_assert_eq!(
            request.validate().unwrap_err(),
            ValidationError::MissingField { field: "PolicyName".to_string() }
        );
    }

    /// Length limits count characters, so multibyte input at the limit
    /// still passes.
    #[test]
    fn prop_lengths_count_chars(len in 1usize..=64) {
        let request = CreateUserRequest {
            user_name: Some("é".repeat(len)),
            ..Default::default()
        };
        prop_assert!(request.validate().is_ok());
    }

    /// Validation never panics on arbitrary input strings.
    #[test]
    fn prop_validation_total(input in "\\PC*") {
        let _ = CreateUserRequest {
            user_name: Some(input.clone()),
            ..Default::default()
        }
        .validate();
        let _ = CreateAccountAliasRequest {
            account_alias: Some(input.clone()),
        }
        .validate();
        let _ = DeleteAccessKeyRequest {
            access_key_id: Some(input),
            ..Default::default()
        }
        .validate();
    }
}
