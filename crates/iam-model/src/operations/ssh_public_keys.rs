//! SSH public key operations

use serde::{Deserialize, Serialize};

use iam_types::constraint::{self, patterns};
use iam_types::{EncodingType, StatusType, Validate, ValidationError, ValidationResult};

use crate::entities::{SshPublicKey, SshPublicKeyMetadata};

use super::impl_paginated;

/// Associates an SSH public key with a user, for authenticating to
/// CodeCommit over SSH.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UploadSshPublicKeyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(rename = "SSHPublicKeyBody", skip_serializing_if = "Option::is_none")]
    pub ssh_public_key_body: Option<String>,
}

impl Validate for UploadSshPublicKeyRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("UserName", self.user_name.as_deref(), 1, 64, Some(&patterns::NAME))?;
        constraint::required_string(
            "SSHPublicKeyBody",
            self.ssh_public_key_body.as_deref(),
            1,
            16384,
            Some(&patterns::POLICY_DOCUMENT),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UploadSshPublicKeyResult {
    #[serde(rename = "SSHPublicKey", skip_serializing_if = "Option::is_none")]
    pub ssh_public_key: Option<SshPublicKey>,
}

/// Retrieves an SSH public key in the requested encoding.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetSshPublicKeyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(rename = "SSHPublicKeyId", skip_serializing_if = "Option::is_none")]
    pub ssh_public_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<EncodingType>,
}

impl Validate for GetSshPublicKeyRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("UserName", self.user_name.as_deref(), 1, 64, Some(&patterns::NAME))?;
        constraint::required_string(
            "SSHPublicKeyId",
            self.ssh_public_key_id.as_deref(),
            20,
            128,
            Some(&patterns::ACCESS_KEY_ID),
        )?;
        if self.encoding.is_none() {
            return Err(ValidationError::MissingField { field: "Encoding".to_string() });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetSshPublicKeyResult {
    #[serde(rename = "SSHPublicKey", skip_serializing_if = "Option::is_none")]
    pub ssh_public_key: Option<SshPublicKey>,
}

/// Flips an SSH public key between Active and Inactive.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateSshPublicKeyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(rename = "SSHPublicKeyId", skip_serializing_if = "Option::is_none")]
    pub ssh_public_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusType>,
}

impl Validate for UpdateSshPublicKeyRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("UserName", self.user_name.as_deref(), 1, 64, Some(&patterns::NAME))?;
        constraint::required_string(
            "SSHPublicKeyId",
            self.ssh_public_key_id.as_deref(),
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

/// Removes an SSH public key from a user.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteSshPublicKeyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(rename = "SSHPublicKeyId", skip_serializing_if = "Option::is_none")]
    pub ssh_public_key_id: Option<String>,
}

impl Validate for DeleteSshPublicKeyRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("UserName", self.user_name.as_deref(), 1, 64, Some(&patterns::NAME))?;
        constraint::required_string(
            "SSHPublicKeyId",
            self.ssh_public_key_id.as_deref(),
            20,
            128,
            Some(&patterns::ACCESS_KEY_ID),
        )
    }
}

/// Lists a user's SSH public keys.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListSshPublicKeysRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<i32>,
}

impl Validate for ListSshPublicKeysRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::optional_string("UserName", self.user_name.as_deref(), 1, 64, Some(&patterns::NAME))?;
        constraint::pagination(self.marker.as_deref(), self.max_items)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListSshPublicKeysResult {
    #[serde(rename = "SSHPublicKeys", skip_serializing_if = "Option::is_none")]
    pub ssh_public_keys: Option<Vec<SshPublicKeyMetadata>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_truncated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

impl_paginated!(ListSshPublicKeysResult);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_requires_encoding() {
        let mut request = GetSshPublicKeyRequest {
            user_name: Some("alice".to_string()),
            ssh_public_key_id: Some("APKAEIBAERJR2EXAMPLE".to_string()),
            encoding: None,
        };
        assert_eq!(
            request.validate().unwrap_err(),
            ValidationError::MissingField { field: "Encoding".to_string() }
        );

        request.encoding = Some(EncodingType::Ssh);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_ssh_wire_renames() {
        let request = UploadSshPublicKeyRequest {
            user_name: Some("alice".to_string()),
            ssh_public_key_body: Some("ssh-rsa AAAA".to_string()),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["SSHPublicKeyBody"], "ssh-rsa AAAA");

        let json = r#"{"SSHPublicKeys":[],"IsTruncated":false}"#;
        let result: ListSshPublicKeysResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.ssh_public_keys, Some(vec![]));
    }
}
