//! MFA devices

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::tag::Tag;
use super::user::User;

/// An MFA device enabled for a user.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MfaDevice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// Serial number for hardware devices, device ARN for virtual ones.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_date: Option<DateTime<Utc>>,
}

/// A virtual MFA device. The seed members are only present in the
/// CreateVirtualMFADevice result and are base64-encoded on the wire.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VirtualMfaDevice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    /// Base32 seed as a base64-encoded blob.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base32_string_seed: Option<String>,
    /// QR code PNG as a base64-encoded blob.
    #[serde(rename = "QRCodePNG", skip_serializing_if = "Option::is_none")]
    pub qr_code_png: Option<String>,
    /// The user the device is assigned to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qr_code_wire_name() {
        let device = VirtualMfaDevice {
            serial_number: Some("arn:aws:iam::123456789012:mfa/dev".to_string()),
            qr_code_png: Some("iVBORw0KGgo=".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&device).unwrap();
        assert!(json.get("QRCodePNG").is_some());
        assert!(json.get("QrCodePng").is_none());
    }
}
