//! MFA device operations

use serde::{Deserialize, Serialize};

use iam_types::constraint::{self, patterns};
use iam_types::{AssignmentStatusType, Validate, ValidationResult};

use crate::entities::{validate_tags, MfaDevice, Tag, VirtualMfaDevice};

use super::impl_paginated;

fn authentication_code(field: &'static str, value: Option<&str>) -> ValidationResult<()> {
    constraint::required_string(field, value, 6, 6, Some(&patterns::AUTHENTICATION_CODE))
}

/// Creates a new virtual MFA device. The seed and QR code PNG are only
/// returned here and cannot be recovered later.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateVirtualMfaDeviceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(rename = "VirtualMFADeviceName", skip_serializing_if = "Option::is_none")]
    pub virtual_mfa_device_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl Validate for CreateVirtualMfaDeviceRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::optional_string("Path", self.path.as_deref(), 1, 512, Some(&patterns::PATH))?;
        constraint::required_string(
            "VirtualMFADeviceName",
            self.virtual_mfa_device_name.as_deref(),
            1,
            226,
            Some(&patterns::NAME),
        )?;
        validate_tags(self.tags.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateVirtualMfaDeviceResult {
    #[serde(rename = "VirtualMFADevice", skip_serializing_if = "Option::is_none")]
    pub virtual_mfa_device: Option<VirtualMfaDevice>,
}

/// Deletes a virtual MFA device. It must be deactivated first.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteVirtualMfaDeviceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
}

impl Validate for DeleteVirtualMfaDeviceRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string(
            "SerialNumber",
            self.serial_number.as_deref(),
            9,
            256,
            Some(&patterns::SERIAL_NUMBER),
        )
    }
}

/// Lists virtual MFA devices by assignment status.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListVirtualMfaDevicesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment_status: Option<AssignmentStatusType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<i32>,
}

impl Validate for ListVirtualMfaDevicesRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::pagination(self.marker.as_deref(), self.max_items)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListVirtualMfaDevicesResult {
    #[serde(rename = "VirtualMFADevices", skip_serializing_if = "Option::is_none")]
    pub virtual_mfa_devices: Option<Vec<VirtualMfaDevice>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_truncated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

/// Enables an MFA device for a user. Both authentication codes must be
/// consecutive codes from the device.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnableMfaDeviceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(rename = "AuthenticationCode1", skip_serializing_if = "Option::is_none")]
    pub authentication_code_1: Option<String>,
    #[serde(rename = "AuthenticationCode2", skip_serializing_if = "Option::is_none")]
    pub authentication_code_2: Option<String>,
}

impl Validate for EnableMfaDeviceRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("UserName", self.user_name.as_deref(), 1, 64, Some(&patterns::NAME))?;
        constraint::required_string(
            "SerialNumber",
            self.serial_number.as_deref(),
            9,
            256,
            Some(&patterns::SERIAL_NUMBER),
        )?;
        authentication_code("AuthenticationCode1", self.authentication_code_1.as_deref())?;
        authentication_code("AuthenticationCode2", self.authentication_code_2.as_deref())
    }
}

/// Deactivates an MFA device without deleting it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeactivateMfaDeviceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
}

impl Validate for DeactivateMfaDeviceRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("UserName", self.user_name.as_deref(), 1, 64, Some(&patterns::NAME))?;
        constraint::required_string(
            "SerialNumber",
            self.serial_number.as_deref(),
            9,
            256,
            Some(&patterns::SERIAL_NUMBER),
        )
    }
}

/// Resynchronizes an MFA device whose clock has drifted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResyncMfaDeviceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(rename = "AuthenticationCode1", skip_serializing_if = "Option::is_none")]
    pub authentication_code_1: Option<String>,
    #[serde(rename = "AuthenticationCode2", skip_serializing_if = "Option::is_none")]
    pub authentication_code_2: Option<String>,
}

impl Validate for ResyncMfaDeviceRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("UserName", self.user_name.as_deref(), 1, 64, Some(&patterns::NAME))?;
        constraint::required_string(
            "SerialNumber",
            self.serial_number.as_deref(),
            9,
            256,
            Some(&patterns::SERIAL_NUMBER),
        )?;
        authentication_code("AuthenticationCode1", self.authentication_code_1.as_deref())?;
        authentication_code("AuthenticationCode2", self.authentication_code_2.as_deref())
    }
}

/// Lists the MFA devices enabled for a user.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListMfaDevicesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<i32>,
}

impl Validate for ListMfaDevicesRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::optional_string("UserName", self.user_name.as_deref(), 1, 64, Some(&patterns::NAME))?;
        constraint::pagination(self.marker.as_deref(), self.max_items)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListMfaDevicesResult {
    #[serde(rename = "MFADevices", skip_serializing_if = "Option::is_none")]
    pub mfa_devices: Option<Vec<MfaDevice>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_truncated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

impl_paginated!(ListVirtualMfaDevicesResult, ListMfaDevicesResult);

#[cfg(test)]
mod tests {
    use super::*;
    use iam_types::ValidationError;

    const SERIAL: &str = "arn:aws:iam::123456789012:mfa/alice";

    #[test]
    fn test_authentication_code_exactly_six_digits() {
        let mut request = EnableMfaDeviceRequest {
            user_name: Some("alice".to_string()),
            serial_number: Some(SERIAL.to_string()),
            authentication_code_1: Some("123456".to_string()),
            authentication_code_2: Some("654321".to_string()),
        };
        assert!(request.validate().is_ok());

        request.authentication_code_2 = Some("65432".to_string());
        assert!(request.validate().is_err());

        request.authentication_code_2 = Some("65432a".to_string());
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_virtual_device_wire_renames() {
        let request = CreateVirtualMfaDeviceRequest {
            virtual_mfa_device_name: Some("alice-phone".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["VirtualMFADeviceName"], "alice-phone");

        let json = r#"{"VirtualMFADevices":[],"IsTruncated":false}"#;
        let result: ListVirtualMfaDevicesResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.virtual_mfa_devices, Some(vec![]));
    }

    #[test]
    fn test_short_serial_rejected() {
        let request = DeleteVirtualMfaDeviceRequest {
            serial_number: Some("GAHT1234".to_string()),
        };
        assert!(matches!(
            request.validate().unwrap_err(),
            ValidationError::TooShort { .. }
        ));
    }
}
