//! Account-level operations: aliases, summary, password policy, and
//! credential reports

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use iam_types::constraint::{self, patterns};
use iam_types::{
    GlobalEndpointTokenVersion, ReportFormatType, ReportStateType, SummaryKeyType, Validate,
    ValidationError, ValidationResult,
};

use chrono::{DateTime, Utc};

use crate::entities::PasswordPolicy;

use super::impl_paginated;

fn validate_account_alias(value: Option<&str>) -> ValidationResult<()> {
    constraint::required_string(
        "AccountAlias",
        value,
        3,
        63,
        Some(&patterns::ACCOUNT_ALIAS),
    )?;
    // The pattern cannot express "no consecutive hyphens".
    if value.is_some_and(|alias| alias.contains("--")) {
        return Err(ValidationError::PatternMismatch {
            field: "AccountAlias".to_string(),
            pattern: patterns::ACCOUNT_ALIAS.as_str().to_string(),
        });
    }
    Ok(())
}

/// Creates an alias for the account ID, usable in sign-in URLs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateAccountAliasRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_alias: Option<String>,
}

impl Validate for CreateAccountAliasRequest {
    fn validate(&self) -> ValidationResult<()> {
        validate_account_alias(self.account_alias.as_deref())
    }
}

/// Deletes the account alias.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteAccountAliasRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_alias: Option<String>,
}

impl Validate for DeleteAccountAliasRequest {
    fn validate(&self) -> ValidationResult<()> {
        validate_account_alias(self.account_alias.as_deref())
    }
}

/// Lists the account's aliases. At most one alias exists, but the
/// response keeps the list-with-pagination shape.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListAccountAliasesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<i32>,
}

impl Validate for ListAccountAliasesRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::pagination(self.marker.as_deref(), self.max_items)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListAccountAliasesResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_aliases: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_truncated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

/// Requests entity and quota usage counts for the account.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetAccountSummaryRequest {}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetAccountSummaryResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_map: Option<HashMap<SummaryKeyType, i32>>,
}

impl GetAccountSummaryResult {
    /// Inserts one summary entry, rejecting duplicate keys.
    pub fn insert_summary(&mut self, key: SummaryKeyType, value: i32) -> ValidationResult<()> {
        let map = self.summary_map.get_or_insert_with(HashMap::new);
        if map.contains_key(&key) {
            return Err(ValidationError::DuplicateKey {
                field: "SummaryMap".to_string(),
                key: key.to_string(),
            });
        }
        map.insert(key, value);
        Ok(())
    }
}

/// Retrieves the account's password policy.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetAccountPasswordPolicyRequest {}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetAccountPasswordPolicyResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_policy: Option<PasswordPolicy>,
}

/// Creates or replaces the account's password policy. Omitted fields
/// revert to their defaults rather than keeping their current values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateAccountPasswordPolicyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_password_length: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_symbols: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_numbers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_uppercase_characters: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_lowercase_characters: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_users_to_change_password: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_password_age: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_reuse_prevention: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hard_expiry: Option<bool>,
}

impl Validate for UpdateAccountPasswordPolicyRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::optional_range("MinimumPasswordLength", self.minimum_password_length, 6, 128)?;
        constraint::optional_range("MaxPasswordAge", self.max_password_age, 1, 1095)?;
        constraint::optional_range("PasswordReusePrevention", self.password_reuse_prevention, 1, 24)
    }
}

/// Deletes the account's password policy.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeleteAccountPasswordPolicyRequest {}

/// Starts generation of the account credential report.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenerateCredentialReportRequest {}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GenerateCredentialReportResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<ReportStateType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Downloads the most recent credential report. Reports are kept for
/// four hours after generation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetCredentialReportRequest {}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetCredentialReportResult {
    /// Base64-encoded report body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_format: Option<ReportFormatType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_time: Option<DateTime<Utc>>,
}

/// Chooses which STS token version regional endpoints issue.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SetSecurityTokenServicePreferencesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_endpoint_token_version: Option<GlobalEndpointTokenVersion>,
}

impl Validate for SetSecurityTokenServicePreferencesRequest {
    fn validate(&self) -> ValidationResult<()> {
        if self.global_endpoint_token_version.is_none() {
            return Err(ValidationError::MissingField {
                field: "GlobalEndpointTokenVersion".to_string(),
            });
        }
        Ok(())
    }
}

impl_paginated!(ListAccountAliasesResult);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_rejects_consecutive_hyphens() {
        let request = CreateAccountAliasRequest {
            account_alias: Some("my--company".to_string()),
        };
        assert!(request.validate().is_err());

        let request = CreateAccountAliasRequest {
            account_alias: Some("my-company".to_string()),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_alias_character_set() {
        for bad in ["My-Company", "co", "-leading", "trailing-"] {
            let request = CreateAccountAliasRequest {
                account_alias: Some(bad.to_string()),
            };
            assert!(request.validate().is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_summary_map_rejects_duplicate_key() {
        let mut result = GetAccountSummaryResult::default();
        result.insert_summary(SummaryKeyType::Users, 12).unwrap();
        result.insert_summary(SummaryKeyType::UsersQuota, 5000).unwrap();
        let err = result.insert_summary(SummaryKeyType::Users, 13).unwrap_err();
        assert_eq!(
            err,
            ValidationError::DuplicateKey {
                field: "SummaryMap".to_string(),
                key: "Users".to_string(),
            }
        );
    }

    #[test]
    fn test_summary_map_wire_keys() {
        let mut result = GetAccountSummaryResult::default();
        result.insert_summary(SummaryKeyType::MfaDevices, 3).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["SummaryMap"]["MFADevices"], 3);
    }

    #[test]
    fn test_password_policy_ranges() {
        let request = UpdateAccountPasswordPolicyRequest {
            minimum_password_length: Some(4),
            ..Default::default()
        };
        assert!(matches!(
            request.validate().unwrap_err(),
            ValidationError::OutOfRange { .. }
        ));

        let request = UpdateAccountPasswordPolicyRequest {
            minimum_password_length: Some(14),
            max_password_age: Some(90),
            password_reuse_prevention: Some(24),
            require_symbols: Some(true),
            ..Default::default()
        };
        assert!(request.validate().is_ok());
    }
}
