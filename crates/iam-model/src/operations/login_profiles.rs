//! Login profile and password operations

use serde::{Deserialize, Serialize};

use iam_types::constraint::{self, patterns};
use iam_types::{Validate, ValidationResult};

use crate::entities::LoginProfile;

/// Creates a console password for a user.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateLoginProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Forces a password change at next sign-in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_reset_required: Option<bool>,
}

impl Validate for CreateLoginProfileRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("UserName", self.user_name.as_deref(), 1, 64, Some(&patterns::NAME))?;
        constraint::required_string(
            "Password",
            self.password.as_deref(),
            1,
            128,
            Some(&patterns::POLICY_DOCUMENT),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateLoginProfileResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_profile: Option<LoginProfile>,
}

/// Retrieves a user's login profile. Failing to find one means the
/// user has no console password.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetLoginProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

impl Validate for GetLoginProfileRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("UserName", self.user_name.as_deref(), 1, 64, Some(&patterns::NAME))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetLoginProfileResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_profile: Option<LoginProfile>,
}

/// Changes a user's console password or reset flag. Both updates are
/// optional; an empty request is a no-op.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateLoginProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_reset_required: Option<bool>,
}

impl Validate for UpdateLoginProfileRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("UserName", self.user_name.as_deref(), 1, 64, Some(&patterns::NAME))?;
        constraint::optional_string(
            "Password",
            self.password.as_deref(),
            1,
            128,
            Some(&patterns::POLICY_DOCUMENT),
        )
    }
}

/// Removes a user's console password.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteLoginProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

impl Validate for DeleteLoginProfileRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("UserName", self.user_name.as_deref(), 1, 64, Some(&patterns::NAME))
    }
}

/// Changes the calling user's own password.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChangePasswordRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
}

impl Validate for ChangePasswordRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string(
            "OldPassword",
            self.old_password.as_deref(),
            1,
            128,
            Some(&patterns::POLICY_DOCUMENT),
        )?;
        constraint::required_string(
            "NewPassword",
            self.new_password.as_deref(),
            1,
            128,
            Some(&patterns::POLICY_DOCUMENT),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_requires_password() {
        let request = CreateLoginProfileRequest {
            user_name: Some("alice".to_string()),
            ..Default::default()
        };
        assert!(request.validate().is_err());

        let request = CreateLoginProfileRequest {
            user_name: Some("alice".to_string()),
            password: Some("correct horse battery staple".to_string()),
            password_reset_required: Some(true),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_update_password_optional() {
        let request = UpdateLoginProfileRequest {
            user_name: Some("alice".to_string()),
            password_reset_required: Some(false),
            ..Default::default()
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_change_password_requires_both() {
        let request = ChangePasswordRequest {
            new_password: Some("hunter22".to_string()),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }
}
