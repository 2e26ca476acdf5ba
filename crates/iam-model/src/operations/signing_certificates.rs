//! Signing certificate operations

use serde::{Deserialize, Serialize};

use iam_types::constraint::{self, patterns};
use iam_types::{StatusType, Validate, ValidationError, ValidationResult};

use crate::entities::SigningCertificate;

use super::impl_paginated;

/// Uploads an X.509 signing certificate for a user.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UploadSigningCertificateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_body: Option<String>,
}

impl Validate for UploadSigningCertificateRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::optional_string("UserName", self.user_name.as_deref(), 1, 64, Some(&patterns::NAME))?;
        constraint::required_string(
            "CertificateBody",
            self.certificate_body.as_deref(),
            1,
            16384,
            Some(&patterns::POLICY_DOCUMENT),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UploadSigningCertificateResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<SigningCertificate>,
}

/// Flips a signing certificate between Active and Inactive.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateSigningCertificateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusType>,
}

impl Validate for UpdateSigningCertificateRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::optional_string("UserName", self.user_name.as_deref(), 1, 64, Some(&patterns::NAME))?;
        constraint::required_string(
            "CertificateId",
            self.certificate_id.as_deref(),
            24,
            128,
            Some(&patterns::ACCESS_KEY_ID),
        )?;
        if self.status.is_none() {
            return Err(ValidationError::MissingField { field: "Status".to_string() });
        }
        Ok(())
    }
}

/// Deletes a signing certificate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteSigningCertificateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_id: Option<String>,
}

impl Validate for DeleteSigningCertificateRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::optional_string("UserName", self.user_name.as_deref(), 1, 64, Some(&patterns::NAME))?;
        constraint::required_string(
            "CertificateId",
            self.certificate_id.as_deref(),
            24,
            128,
            Some(&patterns::ACCESS_KEY_ID),
        )
    }
}

/// Lists a user's signing certificates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListSigningCertificatesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<i32>,
}

impl Validate for ListSigningCertificatesRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::optional_string("UserName", self.user_name.as_deref(), 1, 64, Some(&patterns::NAME))?;
        constraint::pagination(self.marker.as_deref(), self.max_items)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListSigningCertificatesResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificates: Option<Vec<SigningCertificate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_truncated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

impl_paginated!(ListSigningCertificatesResult);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_certificate_id_minimum_length() {
        let request = DeleteSigningCertificateRequest {
            certificate_id: Some("TA7SMP42TDN5Z26OBPJE".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            request.validate().unwrap_err(),
            ValidationError::TooShort { .. }
        ));

        let request = DeleteSigningCertificateRequest {
            certificate_id: Some("TA7SMP42TDN5Z26OBPJE7EXAMPLE".to_string()),
            ..Default::default()
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_update_requires_status() {
        let request = UpdateSigningCertificateRequest {
            certificate_id: Some("TA7SMP42TDN5Z26OBPJE7EXAMPLE".to_string()),
            ..Default::default()
        };
        assert_eq!(
            request.validate().unwrap_err(),
            ValidationError::MissingField { field: "Status".to_string() }
        );
    }
}
