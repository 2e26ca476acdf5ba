//! SAML and OpenID Connect identity provider operations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use iam_types::constraint::{self, patterns};
use iam_types::{Validate, ValidationError, ValidationResult};

use crate::entities::{
    validate_tags, OpenIdConnectProviderListEntry, SamlProviderListEntry, Tag,
};

/// Creates a SAML identity provider from an IdP metadata document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateSamlProviderRequest {
    #[serde(rename = "SAMLMetadataDocument", skip_serializing_if = "Option::is_none")]
    pub saml_metadata_document: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl Validate for CreateSamlProviderRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string(
            "SAMLMetadataDocument",
            self.saml_metadata_document.as_deref(),
            1000,
            10000000,
            None,
        )?;
        constraint::required_string("Name", self.name.as_deref(), 1, 128, Some(&patterns::NAME))?;
        validate_tags(self.tags.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateSamlProviderResult {
    #[serde(rename = "SAMLProviderArn", skip_serializing_if = "Option::is_none")]
    pub saml_provider_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

/// Retrieves a SAML provider's metadata document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetSamlProviderRequest {
    #[serde(rename = "SAMLProviderArn", skip_serializing_if = "Option::is_none")]
    pub saml_provider_arn: Option<String>,
}

impl Validate for GetSamlProviderRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string(
            "SAMLProviderArn",
            self.saml_provider_arn.as_deref(),
            20,
            2048,
            None,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetSamlProviderResult {
    #[serde(rename = "SAMLMetadataDocument", skip_serializing_if = "Option::is_none")]
    pub saml_metadata_document: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

/// Replaces a SAML provider's metadata document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateSamlProviderRequest {
    #[serde(rename = "SAMLMetadataDocument", skip_serializing_if = "Option::is_none")]
    pub saml_metadata_document: Option<String>,
    #[serde(rename = "SAMLProviderArn", skip_serializing_if = "Option::is_none")]
    pub saml_provider_arn: Option<String>,
}

impl Validate for UpdateSamlProviderRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string(
            "SAMLMetadataDocument",
            self.saml_metadata_document.as_deref(),
            1000,
            10000000,
            None,
        )?;
        constraint::required_string(
            "SAMLProviderArn",
            self.saml_provider_arn.as_deref(),
            20,
            2048,
            None,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateSamlProviderResult {
    #[serde(rename = "SAMLProviderArn", skip_serializing_if = "Option::is_none")]
    pub saml_provider_arn: Option<String>,
}

/// Deletes a SAML provider.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteSamlProviderRequest {
    #[serde(rename = "SAMLProviderArn", skip_serializing_if = "Option::is_none")]
    pub saml_provider_arn: Option<String>,
}

impl Validate for DeleteSamlProviderRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string(
            "SAMLProviderArn",
            self.saml_provider_arn.as_deref(),
            20,
            2048,
            None,
        )
    }
}

/// Lists the account's SAML providers. This list does not paginate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListSamlProvidersRequest {}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListSamlProvidersResult {
    #[serde(rename = "SAMLProviderList", skip_serializing_if = "Option::is_none")]
    pub saml_provider_list: Option<Vec<SamlProviderListEntry>>,
}

fn validate_client_id(field: &'static str, value: Option<&str>) -> ValidationResult<()> {
    constraint::required_string(field, value, 1, 255, None)
}

/// Creates an OpenID Connect identity provider.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateOpenIdConnectProviderRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "ClientIDList", skip_serializing_if = "Option::is_none")]
    pub client_id_list: Option<Vec<String>>,
    /// SHA-1 hex thumbprints of the provider's server certificates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbprint_list: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl Validate for CreateOpenIdConnectProviderRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("Url", self.url.as_deref(), 1, 255, None)?;
        if let Some(client_ids) = self.client_id_list.as_deref() {
            for client_id in client_ids {
                validate_client_id("ClientIDList", Some(client_id))?;
            }
        }
        let thumbprints = self
            .thumbprint_list
            .as_deref()
            .ok_or_else(|| ValidationError::MissingField {
                field: "ThumbprintList".to_string(),
            })?;
        for thumbprint in thumbprints {
            constraint::required_string("ThumbprintList", Some(thumbprint), 40, 40, None)?;
        }
        validate_tags(self.tags.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateOpenIdConnectProviderResult {
    #[serde(rename = "OpenIDConnectProviderArn", skip_serializing_if = "Option::is_none")]
    pub open_id_connect_provider_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

/// Retrieves an OpenID Connect provider's configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetOpenIdConnectProviderRequest {
    #[serde(rename = "OpenIDConnectProviderArn", skip_serializing_if = "Option::is_none")]
    pub open_id_connect_provider_arn: Option<String>,
}

impl Validate for GetOpenIdConnectProviderRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string(
            "OpenIDConnectProviderArn",
            self.open_id_connect_provider_arn.as_deref(),
            20,
            2048,
            None,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetOpenIdConnectProviderResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "ClientIDList", skip_serializing_if = "Option::is_none")]
    pub client_id_list: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbprint_list: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

/// Deletes an OpenID Connect provider.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteOpenIdConnectProviderRequest {
    #[serde(rename = "OpenIDConnectProviderArn", skip_serializing_if = "Option::is_none")]
    pub open_id_connect_provider_arn: Option<String>,
}

impl Validate for DeleteOpenIdConnectProviderRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string(
            "OpenIDConnectProviderArn",
            self.open_id_connect_provider_arn.as_deref(),
            20,
            2048,
            None,
        )
    }
}

/// Lists the account's OpenID Connect providers. This list does not
/// paginate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListOpenIdConnectProvidersRequest {}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListOpenIdConnectProvidersResult {
    #[serde(rename = "OpenIDConnectProviderList", skip_serializing_if = "Option::is_none")]
    pub open_id_connect_provider_list: Option<Vec<OpenIdConnectProviderListEntry>>,
}

/// Registers a new client ID with an OpenID Connect provider.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddClientIdToOpenIdConnectProviderRequest {
    #[serde(rename = "OpenIDConnectProviderArn", skip_serializing_if = "Option::is_none")]
    pub open_id_connect_provider_arn: Option<String>,
    #[serde(rename = "ClientID", skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

impl Validate for AddClientIdToOpenIdConnectProviderRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string(
            "OpenIDConnectProviderArn",
            self.open_id_connect_provider_arn.as_deref(),
            20,
            2048,
            None,
        )?;
        validate_client_id("ClientID", self.client_id.as_deref())
    }
}

/// Removes a client ID from an OpenID Connect provider.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RemoveClientIdFromOpenIdConnectProviderRequest {
    #[serde(rename = "OpenIDConnectProviderArn", skip_serializing_if = "Option::is_none")]
    pub open_id_connect_provider_arn: Option<String>,
    #[serde(rename = "ClientID", skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

impl Validate for RemoveClientIdFromOpenIdConnectProviderRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string(
            "OpenIDConnectProviderArn",
            self.open_id_connect_provider_arn.as_deref(),
            20,
            2048,
            None,
        )?;
        validate_client_id("ClientID", self.client_id.as_deref())
    }
}

/// Replaces an OpenID Connect provider's thumbprint list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateOpenIdConnectProviderThumbprintRequest {
    #[serde(rename = "OpenIDConnectProviderArn", skip_serializing_if = "Option::is_none")]
    pub open_id_connect_provider_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbprint_list: Option<Vec<String>>,
}

impl Validate for UpdateOpenIdConnectProviderThumbprintRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string(
            "OpenIDConnectProviderArn",
            self.open_id_connect_provider_arn.as_deref(),
            20,
            2048,
            None,
        )?;
        let thumbprints = self
            .thumbprint_list
            .as_deref()
            .ok_or_else(|| ValidationError::MissingField {
                field: "ThumbprintList".to_string(),
            })?;
        for thumbprint in thumbprints {
            constraint::required_string("ThumbprintList", Some(thumbprint), 40, 40, None)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OIDC_ARN: &str = "arn:aws:iam::123456789012:oidc-provider/login.example.com";

    #[test]
    fn test_saml_metadata_minimum_length() {
        let request = CreateSamlProviderRequest {
            saml_metadata_document: Some("<EntityDescriptor/>".to_string()),
            name: Some("corp-idp".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            request.validate().unwrap_err(),
            ValidationError::TooShort { .. }
        ));
    }

    #[test]
    fn test_oidc_thumbprint_exactly_forty() {
        let mut request = CreateOpenIdConnectProviderRequest {
            url: Some("https://login.example.com".to_string()),
            thumbprint_list: Some(vec!["c3768084dfb3d2b68b7897bf5f565da8efEXAMPLE".to_string()]),
            ..Default::default()
        };
        assert!(request.validate().is_err());

        request.thumbprint_list = Some(vec!["c3768084dfb3d2b68b7897bf5f565da8eEXAMPLE".to_string()]);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_client_id_wire_rename() {
        let request = AddClientIdToOpenIdConnectProviderRequest {
            open_id_connect_provider_arn: Some(OIDC_ARN.to_string()),
            client_id: Some("my-application-ID".to_string()),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["ClientID"], "my-application-ID");
        assert_eq!(json["OpenIDConnectProviderArn"], OIDC_ARN);
    }
}
