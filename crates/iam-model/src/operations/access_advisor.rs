//! Last-accessed reporting operations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use iam_types::constraint::{self, patterns};
use iam_types::{
    AccessAdvisorUsageGranularityType, JobStatusType, SortKeyType, Validate, ValidationError,
    ValidationResult,
};

use crate::entities::{
    AccessDetail, EntityDetails, ErrorDetails, ListPoliciesGrantingServiceAccessEntry,
    ServiceLastAccessed,
};

use super::impl_paginated;

/// Starts an asynchronous report of the services a user, group, role,
/// or policy was last used to access.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GenerateServiceLastAccessedDetailsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    /// Service-level by default; action-level adds per-action rows for
    /// the services that report them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub granularity: Option<AccessAdvisorUsageGranularityType>,
}

impl Validate for GenerateServiceLastAccessedDetailsRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("Arn", self.arn.as_deref(), 20, 2048, None)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GenerateServiceLastAccessedDetailsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
}

fn validate_job_id(value: Option<&str>) -> ValidationResult<()> {
    constraint::required_string("JobId", value, 36, 36, None)
}

/// Fetches the result of a GenerateServiceLastAccessedDetails job.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetServiceLastAccessedDetailsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<i32>,
}

impl Validate for GetServiceLastAccessedDetailsRequest {
    fn validate(&self) -> ValidationResult<()> {
        validate_job_id(self.job_id.as_deref())?;
        constraint::pagination(self.marker.as_deref(), self.max_items)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetServiceLastAccessedDetailsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_status: Option<JobStatusType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_type: Option<AccessAdvisorUsageGranularityType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_creation_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services_last_accessed: Option<Vec<ServiceLastAccessed>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_completion_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_truncated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetails>,
}

/// Fetches, for one service from a completed job, the entities that
/// used it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetServiceLastAccessedDetailsWithEntitiesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<i32>,
}

impl Validate for GetServiceLastAccessedDetailsWithEntitiesRequest {
    fn validate(&self) -> ValidationResult<()> {
        validate_job_id(self.job_id.as_deref())?;
        constraint::required_string(
            "ServiceNamespace",
            self.service_namespace.as_deref(),
            1,
            64,
            Some(&patterns::SERVICE_NAMESPACE),
        )?;
        constraint::pagination(self.marker.as_deref(), self.max_items)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetServiceLastAccessedDetailsWithEntitiesResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_status: Option<JobStatusType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_creation_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_completion_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_details_list: Option<Vec<EntityDetails>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_truncated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetails>,
}

/// Lists the policies that grant a principal access to the named
/// services. Marker-only pagination, with no MaxItems control.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListPoliciesGrantingServiceAccessRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_namespaces: Option<Vec<String>>,
}

impl Validate for ListPoliciesGrantingServiceAccessRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string("Arn", self.arn.as_deref(), 20, 2048, None)?;
        let namespaces = self.service_namespaces.as_deref().ok_or_else(|| {
            ValidationError::MissingField { field: "ServiceNamespaces".to_string() }
        })?;
        if namespaces.is_empty() || namespaces.len() > 200 {
            return Err(ValidationError::OutOfRange {
                field: "ServiceNamespaces".to_string(),
                value: namespaces.len() as i64,
                min: 1,
                max: 200,
            });
        }
        constraint::string_list(
            "ServiceNamespaces",
            Some(namespaces),
            1,
            64,
            Some(&patterns::SERVICE_NAMESPACE),
        )?;
        constraint::pagination(self.marker.as_deref(), None)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListPoliciesGrantingServiceAccessResult {
    #[serde(rename = "PoliciesGrantingServiceAccess", skip_serializing_if = "Option::is_none")]
    pub policies_granting_service_access: Option<Vec<ListPoliciesGrantingServiceAccessEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_truncated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

/// Starts an asynchronous report of service access within an AWS
/// Organizations subtree.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GenerateOrganizationsAccessReportRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizations_policy_id: Option<String>,
}

impl Validate for GenerateOrganizationsAccessReportRequest {
    fn validate(&self) -> ValidationResult<()> {
        constraint::required_string(
            "EntityPath",
            self.entity_path.as_deref(),
            19,
            427,
            Some(&patterns::ORGANIZATIONS_ENTITY_PATH),
        )?;
        constraint::optional_string(
            "OrganizationsPolicyId",
            self.organizations_policy_id.as_deref(),
            1,
            128,
            Some(&patterns::ORGANIZATIONS_POLICY_ID),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GenerateOrganizationsAccessReportResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
}

/// Fetches the result of a GenerateOrganizationsAccessReport job.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetOrganizationsAccessReportRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_key: Option<SortKeyType>,
}

impl Validate for GetOrganizationsAccessReportRequest {
    fn validate(&self) -> ValidationResult<()> {
        validate_job_id(self.job_id.as_deref())?;
        constraint::pagination(self.marker.as_deref(), self.max_items)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetOrganizationsAccessReportResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_status: Option<JobStatusType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_creation_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_completion_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_services_accessible: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_services_not_accessed: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_details: Option<Vec<AccessDetail>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_truncated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_details: Option<ErrorDetails>,
}

impl_paginated!(
    GetServiceLastAccessedDetailsResult,
    GetServiceLastAccessedDetailsWithEntitiesResult,
    ListPoliciesGrantingServiceAccessResult,
    GetOrganizationsAccessReportResult
);

#[cfg(test)]
mod tests {
    use super::*;

    const JOB_ID: &str = "examplef-1305-c245-eba4-71fe298bcda7";

    #[test]
    fn test_job_id_fixed_length() {
        let request = GetServiceLastAccessedDetailsRequest {
            job_id: Some(JOB_ID.to_string()),
            ..Default::default()
        };
        assert!(request.validate().is_ok());

        let request = GetServiceLastAccessedDetailsRequest {
            job_id: Some("not-a-job-id".to_string()),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_namespaces_capped_at_two_hundred() {
        let request = ListPoliciesGrantingServiceAccessRequest {
            arn: Some("arn:aws:iam::123456789012:user/alice".to_string()),
            service_namespaces: Some(vec!["iam".to_string(); 201]),
            ..Default::default()
        };
        assert!(matches!(
            request.validate().unwrap_err(),
            ValidationError::OutOfRange { .. }
        ));

        let request = ListPoliciesGrantingServiceAccessRequest {
            arn: Some("arn:aws:iam::123456789012:user/alice".to_string()),
            service_namespaces: Some(vec!["iam".to_string(), "ec2".to_string()]),
            ..Default::default()
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_organizations_entity_path() {
        let request = GenerateOrganizationsAccessReportRequest {
            entity_path: Some("o-a1b2c3d4e5/r-f6g7h8i9j0/ou-1234-m3n4o5p6".to_string()),
            ..Default::default()
        };
        assert!(request.validate().is_ok());

        let request = GenerateOrganizationsAccessReportRequest {
            entity_path: Some("short".to_string()),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }
}
