//! SAML and OpenID Connect provider list entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A SAML provider as returned by ListSAMLProviders.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SamlProviderListEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    /// Expiration of the provider's metadata document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<DateTime<Utc>>,
}

/// An OIDC provider as returned by ListOpenIDConnectProviders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OpenIdConnectProviderListEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
}
