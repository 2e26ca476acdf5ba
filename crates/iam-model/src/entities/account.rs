//! Account-level password policy

use serde::{Deserialize, Serialize};

/// The account's password policy for console passwords.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PasswordPolicy {
    /// Minimum password length, 6-128.
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
    pub expire_passwords: Option<bool>,
    /// Days before a password expires, 1-1095.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_password_age: Option<i32>,
    /// Number of previous passwords that cannot be reused, 1-24.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_reuse_prevention: Option<i32>,
    /// Whether an expired password blocks the user until an
    /// administrator resets it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hard_expiry: Option<bool>,
}
