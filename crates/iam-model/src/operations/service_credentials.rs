//! Service-specific credential operations

use serde::{Deserialize, Serialize};

use iam_types::constraint::{self, patterns};
use iam_types::{StatusType, Validate, ValidationError, ValidationResult};

use crate::entities::{ServiceSpecificCredential, ServiceSpecificCredentialMetadata};

/// Generates a user name and password for a specific service, such as
/// CodeCommit HTTPS access. The password is only returned here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateServiceSpecificCredentialRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
}

impl Validate for CreateServiceSpecificCredentialRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("UserName", self.user_name.as_deref(), 1, 64, Some(&patterns::NAME))?;
        if self.service_name.as_deref().map_or(true, str::is_empty) {
            return Err(ValidationError::MissingField { field: "ServiceName".to_string() });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateServiceSpecificCredentialResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_specific_credential: Option<ServiceSpecificCredential>,
}

/// Resets a service-specific credential's password. The old password
/// stops working immediately.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResetServiceSpecificCredentialRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_specific_credential_id: Option<String>,
}

impl Validate for ResetServiceSpecificCredentialRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::optional_string("UserName", self.user_name.as_deref(), 1, 64, Some(&patterns::NAME))?;
        constraint::required_string(
            "ServiceSpecificCredentialId",
            self.service_specific_credential_id.as_deref(),
            20,
            128,
            Some(&patterns::ACCESS_KEY_ID),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResetServiceSpecificCredentialResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_specific_credential: Option<ServiceSpecificCredential>,
}

/// Flips a service-specific credential between Active and Inactive.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateServiceSpecificCredentialRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_specific_credential_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusType>,
}

impl Validate for UpdateServiceSpecificCredentialRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::optional_string("UserName", self.user_name.as_deref(), 1, 64, Some(&patterns::NAME))?;
        constraint::required_string(
            "ServiceSpecificCredentialId",
            self.service_specific_credential_id.as_deref(),
            20,
            128,
            Some(&patterns::ACCESS_KEY_ID),
        )?;
        if self.status.is_none() {
            return Err(ValidationError::MissingField { field: "Status".to_string() });
        }
        Ok(())
    }
}

/// Deletes a service-specific credential.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteServiceSpecificCredentialRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_specific_credential_id: Option<String>,
}

impl Validate for DeleteServiceSpecificCredentialRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::optional_string("UserName", self.user_name.as_deref(), 1, 64, Some(&patterns::NAME))?;
        constraint::required_string(
            "ServiceSpecificCredentialId",
            self.service_specific_credential_id.as_deref(),
            20,
            128,
            Some(&patterns::ACCESS_KEY_ID),
        )
    }
}

/// Lists a user's service-specific credentials, optionally filtered by
/// service. This list does not paginate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListServiceSpecificCredentialsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
}

impl Validate for ListServiceSpecificCredentialsRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::optional_string("UserName", self.user_name.as_deref(), 1, 64, Some(&patterns::NAME))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListServiceSpecificCredentialsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_specific_credentials: Option<Vec<ServiceSpecificCredentialMetadata>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_requires_service_name() {
        let request = CreateServiceSpecificCredentialRequest {
            user_name: Some("alice".to_string()),
            service_name: Some(String::new()),
        };
        assert_eq!(
            request.validate().unwrap_err(),
            ValidationError::MissingField { field: "ServiceName".to_string() }
        );

        let request = CreateServiceSpecificCredentialRequest {
            user_name: Some("alice".to_string()),
            service_name: Some("codecommit.amazonaws.com".to_string()),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_list_result_has_no_pagination_fields() {
        let json = r#"{"ServiceSpecificCredentials":[]}"#;
        let result: ListServiceSpecificCredentialsResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.service_specific_credentials, Some(vec![]));
        assert_eq!(serde_json::to_string(&result).unwrap(), json);
    }
}
