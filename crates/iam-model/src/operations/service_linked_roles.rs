//! Service-linked role operations

use serde::{Deserialize, Serialize};

use iam_types::constraint::{self, patterns};
use iam_types::{DeletionTaskStatusType, Validate, ValidationResult};

use crate::entities::{DeletionTaskFailureReasonType, Role};

/// Creates a role linked to an AWS service.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateServiceLinkedRoleRequest {
    /// Service principal, e.g. `elasticbeanstalk.amazonaws.com`.
    #[serde(rename = "AWSServiceName", skip_serializing_if = "Option::is_none")]
    pub aws_service_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Suffix appended to the role name; only allowed when the service
    /// supports multiple linked roles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_suffix: Option<String>,
}

impl Validate for CreateServiceLinkedRoleRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string(
            "AWSServiceName",
            self.aws_service_name.as_deref(),
            1,
            128,
            None,
        )?;
        constraint::optional_string(
            "Description",
            self.description.as_deref(),
            0,
            1000,
            Some(&patterns::DESCRIPTION),
        )?;
        constraint::optional_string(
            "CustomSuffix",
            self.custom_suffix.as_deref(),
            1,
            64,
            Some(&patterns::NAME),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateServiceLinkedRoleResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Submits an asynchronous deletion of a service-linked role.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteServiceLinkedRoleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
}

impl Validate for DeleteServiceLinkedRoleRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string(
            "RoleName",
            self.role_name.as_deref(),
            1,
            64,
            Some(&patterns::NAME),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteServiceLinkedRoleResult {
    /// Token for polling the deletion status, of the form
    /// `task/aws-service-role/<service>/<role>/<id>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_task_id: Option<String>,
}

/// Polls the status of a service-linked role deletion.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetServiceLinkedRoleDeletionStatusRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_task_id: Option<String>,
}

impl Validate for GetServiceLinkedRoleDeletionStatusRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string(
            "DeletionTaskId",
            self.deletion_task_id.as_deref(),
            1,
            1000,
            None,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetServiceLinkedRoleDeletionStatusResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DeletionTaskStatusType>,
    /// Present when the task failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<DeletionTaskFailureReasonType>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aws_service_name_wire_rename() {
        let request = CreateServiceLinkedRoleRequest {
            aws_service_name: Some("autoscaling.amazonaws.com".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("AWSServiceName").is_some());
        assert!(json.get("AwsServiceName").is_none());
    }

    #[test]
    fn test_deletion_status_wire_strings() {
        let result = GetServiceLinkedRoleDeletionStatusResult {
            status: Some(DeletionTaskStatusType::NotStarted),
            reason: None,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["Status"], "NOT_STARTED");
    }
}
