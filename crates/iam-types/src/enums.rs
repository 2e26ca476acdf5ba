//! Closed enum types for every service-defined value set
//!
//! Each enum carries the exact wire strings via serde renames, plus
//! `as_str()` / `Display` / `FromStr` so callers never handle raw strings.
//! Parsing an unknown value fails with [`ValidationError::UnknownEnumValue`];
//! there is no catch-all variant.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Activation state of a credential: access keys, signing certificates,
/// SSH public keys, and service-specific credentials all share it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusType {
    Active,
    Inactive,
}

impl StatusType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusType::Active => "Active",
            StatusType::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for StatusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(StatusType::Active),
            "Inactive" => Ok(StatusType::Inactive),
            other => Err(unknown("StatusType", other)),
        }
    }
}

/// Assignment filter for listing virtual MFA devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssignmentStatusType {
    Assigned,
    Unassigned,
    Any,
}

impl AssignmentStatusType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentStatusType::Assigned => "Assigned",
            AssignmentStatusType::Unassigned => "Unassigned",
            AssignmentStatusType::Any => "Any",
        }
    }
}

impl fmt::Display for AssignmentStatusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssignmentStatusType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Assigned" => Ok(AssignmentStatusType::Assigned),
            "Unassigned" => Ok(AssignmentStatusType::Unassigned),
            "Any" => Ok(AssignmentStatusType::Any),
            other => Err(unknown("AssignmentStatusType", other)),
        }
    }
}

/// Scope filter for listing managed policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyScopeType {
    All,
    #[serde(rename = "AWS")]
    Aws,
    Local,
}

impl PolicyScopeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyScopeType::All => "All",
            PolicyScopeType::Aws => "AWS",
            PolicyScopeType::Local => "Local",
        }
    }
}

impl fmt::Display for PolicyScopeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyScopeType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "All" => Ok(PolicyScopeType::All),
            "AWS" => Ok(PolicyScopeType::Aws),
            "Local" => Ok(PolicyScopeType::Local),
            other => Err(unknown("PolicyScopeType", other)),
        }
    }
}

/// Whether an attached policy acts as a permissions policy or as a
/// permissions boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyUsageType {
    PermissionsPolicy,
    PermissionsBoundary,
}

impl PolicyUsageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyUsageType::PermissionsPolicy => "PermissionsPolicy",
            PolicyUsageType::PermissionsBoundary => "PermissionsBoundary",
        }
    }
}

impl fmt::Display for PolicyUsageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyUsageType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PermissionsPolicy" => Ok(PolicyUsageType::PermissionsPolicy),
            "PermissionsBoundary" => Ok(PolicyUsageType::PermissionsBoundary),
            other => Err(unknown("PolicyUsageType", other)),
        }
    }
}

/// IAM entity kinds, used when filtering account authorization details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityType {
    User,
    Role,
    Group,
    LocalManagedPolicy,
    #[serde(rename = "AWSManagedPolicy")]
    AwsManagedPolicy,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::User => "User",
            EntityType::Role => "Role",
            EntityType::Group => "Group",
            EntityType::LocalManagedPolicy => "LocalManagedPolicy",
            EntityType::AwsManagedPolicy => "AWSManagedPolicy",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "User" => Ok(EntityType::User),
            "Role" => Ok(EntityType::Role),
            "Group" => Ok(EntityType::Group),
            "LocalManagedPolicy" => Ok(EntityType::LocalManagedPolicy),
            "AWSManagedPolicy" => Ok(EntityType::AwsManagedPolicy),
            other => Err(unknown("EntityType", other)),
        }
    }
}

/// Credential report format. The service publishes exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportFormatType {
    #[serde(rename = "text/csv")]
    TextCsv,
}

impl ReportFormatType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormatType::TextCsv => "text/csv",
        }
    }
}

impl fmt::Display for ReportFormatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportFormatType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text/csv" => Ok(ReportFormatType::TextCsv),
            other => Err(unknown("ReportFormatType", other)),
        }
    }
}

/// Generation state of the account credential report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportStateType {
    #[serde(rename = "STARTED")]
    Started,
    #[serde(rename = "INPROGRESS")]
    InProgress,
    #[serde(rename = "COMPLETE")]
    Complete,
}

impl ReportStateType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStateType::Started => "STARTED",
            ReportStateType::InProgress => "INPROGRESS",
            ReportStateType::Complete => "COMPLETE",
        }
    }
}

impl fmt::Display for ReportStateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportStateType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "STARTED" => Ok(ReportStateType::Started),
            "INPROGRESS" => Ok(ReportStateType::InProgress),
            "COMPLETE" => Ok(ReportStateType::Complete),
            other => Err(unknown("ReportStateType", other)),
        }
    }
}

/// Progress of an asynchronous report-generation job (service last
/// accessed details, organizations access report).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobStatusType {
    #[serde(rename = "IN_PROGRESS")]
    InProgress,
    #[serde(rename = "COMPLETED")]
    Completed,
    #[serde(rename = "FAILED")]
    Failed,
}

impl JobStatusType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatusType::InProgress => "IN_PROGRESS",
            JobStatusType::Completed => "COMPLETED",
            JobStatusType::Failed => "FAILED",
        }
    }
}

impl fmt::Display for JobStatusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatusType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IN_PROGRESS" => Ok(JobStatusType::InProgress),
            "COMPLETED" => Ok(JobStatusType::Completed),
            "FAILED" => Ok(JobStatusType::Failed),
            other => Err(unknown("JobStatusType", other)),
        }
    }
}

/// Sort order for the organizations access report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKeyType {
    #[serde(rename = "SERVICE_NAMESPACE_ASCENDING")]
    ServiceNamespaceAscending,
    #[serde(rename = "SERVICE_NAMESPACE_DESCENDING")]
    ServiceNamespaceDescending,
    #[serde(rename = "LAST_AUTHENTICATED_TIME_ASCENDING")]
    LastAuthenticatedTimeAscending,
    #[serde(rename = "LAST_AUTHENTICATED_TIME_DESCENDING")]
    LastAuthenticatedTimeDescending,
}

impl SortKeyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKeyType::ServiceNamespaceAscending => "SERVICE_NAMESPACE_ASCENDING",
            SortKeyType::ServiceNamespaceDescending => "SERVICE_NAMESPACE_DESCENDING",
            SortKeyType::LastAuthenticatedTimeAscending => "LAST_AUTHENTICATED_TIME_ASCENDING",
            SortKeyType::LastAuthenticatedTimeDescending => "LAST_AUTHENTICATED_TIME_DESCENDING",
        }
    }
}

impl fmt::Display for SortKeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKeyType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SERVICE_NAMESPACE_ASCENDING" => Ok(SortKeyType::ServiceNamespaceAscending),
            "SERVICE_NAMESPACE_DESCENDING" => Ok(SortKeyType::ServiceNamespaceDescending),
            "LAST_AUTHENTICATED_TIME_ASCENDING" => {
                Ok(SortKeyType::LastAuthenticatedTimeAscending)
            }
            "LAST_AUTHENTICATED_TIME_DESCENDING" => {
                Ok(SortKeyType::LastAuthenticatedTimeDescending)
            }
            other => Err(unknown("SortKeyType", other)),
        }
    }
}

/// Outcome of evaluating one action/resource pair in the policy simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyEvaluationDecisionType {
    #[serde(rename = "allowed")]
    Allowed,
    #[serde(rename = "explicitDeny")]
    ExplicitDeny,
    #[serde(rename = "implicitDeny")]
    ImplicitDeny,
}

impl PolicyEvaluationDecisionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyEvaluationDecisionType::Allowed => "allowed",
            PolicyEvaluationDecisionType::ExplicitDeny => "explicitDeny",
            PolicyEvaluationDecisionType::ImplicitDeny => "implicitDeny",
        }
    }
}

impl fmt::Display for PolicyEvaluationDecisionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyEvaluationDecisionType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "allowed" => Ok(PolicyEvaluationDecisionType::Allowed),
            "explicitDeny" => Ok(PolicyEvaluationDecisionType::ExplicitDeny),
            "implicitDeny" => Ok(PolicyEvaluationDecisionType::ImplicitDeny),
            other => Err(unknown("PolicyEvaluationDecisionType", other)),
        }
    }
}

/// Where a statement that contributed to a simulation decision came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicySourceType {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "group")]
    Group,
    #[serde(rename = "role")]
    Role,
    #[serde(rename = "aws-managed")]
    AwsManaged,
    #[serde(rename = "user-managed")]
    UserManaged,
    #[serde(rename = "resource")]
    Resource,
    #[serde(rename = "none")]
    None,
}

impl PolicySourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicySourceType::User => "user",
            PolicySourceType::Group => "group",
            PolicySourceType::Role => "role",
            PolicySourceType::AwsManaged => "aws-managed",
            PolicySourceType::UserManaged => "user-managed",
            PolicySourceType::Resource => "resource",
            PolicySourceType::None => "none",
        }
    }
}

impl fmt::Display for PolicySourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicySourceType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(PolicySourceType::User),
            "group" => Ok(PolicySourceType::Group),
            "role" => Ok(PolicySourceType::Role),
            "aws-managed" => Ok(PolicySourceType::AwsManaged),
            "user-managed" => Ok(PolicySourceType::UserManaged),
            "resource" => Ok(PolicySourceType::Resource),
            "none" => Ok(PolicySourceType::None),
            other => Err(unknown("PolicySourceType", other)),
        }
    }
}

/// Data type of a context key supplied to the policy simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContextKeyTypeEnum {
    #[serde(rename = "string")]
    String,
    #[serde(rename = "stringList")]
    StringList,
    #[serde(rename = "numeric")]
    Numeric,
    #[serde(rename = "numericList")]
    NumericList,
    #[serde(rename = "boolean")]
    Boolean,
    #[serde(rename = "booleanList")]
    BooleanList,
    #[serde(rename = "ip")]
    Ip,
    #[serde(rename = "ipList")]
    IpList,
    #[serde(rename = "date")]
    Date,
    #[serde(rename = "dateList")]
    DateList,
}

impl ContextKeyTypeEnum {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContextKeyTypeEnum::String => "string",
            ContextKeyTypeEnum::StringList => "stringList",
            ContextKeyTypeEnum::Numeric => "numeric",
            ContextKeyTypeEnum::NumericList => "numericList",
            ContextKeyTypeEnum::Boolean => "boolean",
            ContextKeyTypeEnum::BooleanList => "booleanList",
            ContextKeyTypeEnum::Ip => "ip",
            ContextKeyTypeEnum::IpList => "ipList",
            ContextKeyTypeEnum::Date => "date",
            ContextKeyTypeEnum::DateList => "dateList",
        }
    }
}

impl fmt::Display for ContextKeyTypeEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContextKeyTypeEnum {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(ContextKeyTypeEnum::String),
            "stringList" => Ok(ContextKeyTypeEnum::StringList),
            "numeric" => Ok(ContextKeyTypeEnum::Numeric),
            "numericList" => Ok(ContextKeyTypeEnum::NumericList),
            "boolean" => Ok(ContextKeyTypeEnum::Boolean),
            "booleanList" => Ok(ContextKeyTypeEnum::BooleanList),
            "ip" => Ok(ContextKeyTypeEnum::Ip),
            "ipList" => Ok(ContextKeyTypeEnum::IpList),
            "date" => Ok(ContextKeyTypeEnum::Date),
            "dateList" => Ok(ContextKeyTypeEnum::DateList),
            other => Err(unknown("ContextKeyTypeEnum", other)),
        }
    }
}

/// State of a service-linked role deletion task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeletionTaskStatusType {
    #[serde(rename = "SUCCEEDED")]
    Succeeded,
    #[serde(rename = "IN_PROGRESS")]
    InProgress,
    #[serde(rename = "FAILED")]
    Failed,
    #[serde(rename = "NOT_STARTED")]
    NotStarted,
}

impl DeletionTaskStatusType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeletionTaskStatusType::Succeeded => "SUCCEEDED",
            DeletionTaskStatusType::InProgress => "IN_PROGRESS",
            DeletionTaskStatusType::Failed => "FAILED",
            DeletionTaskStatusType::NotStarted => "NOT_STARTED",
        }
    }
}

impl fmt::Display for DeletionTaskStatusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeletionTaskStatusType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SUCCEEDED" => Ok(DeletionTaskStatusType::Succeeded),
            "IN_PROGRESS" => Ok(DeletionTaskStatusType::InProgress),
            "FAILED" => Ok(DeletionTaskStatusType::Failed),
            "NOT_STARTED" => Ok(DeletionTaskStatusType::NotStarted),
            other => Err(unknown("DeletionTaskStatusType", other)),
        }
    }
}

/// Kind of entity that owns a policy granting service access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyOwnerEntityType {
    #[serde(rename = "USER")]
    User,
    #[serde(rename = "ROLE")]
    Role,
    #[serde(rename = "GROUP")]
    Group,
}

impl PolicyOwnerEntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyOwnerEntityType::User => "USER",
            PolicyOwnerEntityType::Role => "ROLE",
            PolicyOwnerEntityType::Group => "GROUP",
        }
    }
}

impl fmt::Display for PolicyOwnerEntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyOwnerEntityType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => Ok(PolicyOwnerEntityType::User),
            "ROLE" => Ok(PolicyOwnerEntityType::Role),
            "GROUP" => Ok(PolicyOwnerEntityType::Group),
            other => Err(unknown("PolicyOwnerEntityType", other)),
        }
    }
}

/// Whether a policy is inline or managed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyType {
    #[serde(rename = "INLINE")]
    Inline,
    #[serde(rename = "MANAGED")]
    Managed,
}

impl PolicyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyType::Inline => "INLINE",
            PolicyType::Managed => "MANAGED",
        }
    }
}

impl fmt::Display for PolicyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INLINE" => Ok(PolicyType::Inline),
            "MANAGED" => Ok(PolicyType::Managed),
            other => Err(unknown("PolicyType", other)),
        }
    }
}

/// How a permissions boundary is attached. One value today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PermissionsBoundaryAttachmentType {
    PermissionsBoundaryPolicy,
}

impl PermissionsBoundaryAttachmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionsBoundaryAttachmentType::PermissionsBoundaryPolicy => {
                "PermissionsBoundaryPolicy"
            }
        }
    }
}

impl fmt::Display for PermissionsBoundaryAttachmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PermissionsBoundaryAttachmentType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PermissionsBoundaryPolicy" => {
                Ok(PermissionsBoundaryAttachmentType::PermissionsBoundaryPolicy)
            }
            other => Err(unknown("PermissionsBoundaryAttachmentType", other)),
        }
    }
}

/// STS session token version preference for the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GlobalEndpointTokenVersion {
    #[serde(rename = "v1Token")]
    V1Token,
    #[serde(rename = "v2Token")]
    V2Token,
}

impl GlobalEndpointTokenVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            GlobalEndpointTokenVersion::V1Token => "v1Token",
            GlobalEndpointTokenVersion::V2Token => "v2Token",
        }
    }
}

impl fmt::Display for GlobalEndpointTokenVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GlobalEndpointTokenVersion {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "v1Token" => Ok(GlobalEndpointTokenVersion::V1Token),
            "v2Token" => Ok(GlobalEndpointTokenVersion::V2Token),
            other => Err(unknown("GlobalEndpointTokenVersion", other)),
        }
    }
}

/// Encoding requested when fetching an SSH public key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EncodingType {
    #[serde(rename = "SSH")]
    Ssh,
    #[serde(rename = "PEM")]
    Pem,
}

impl EncodingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EncodingType::Ssh => "SSH",
            EncodingType::Pem => "PEM",
        }
    }
}

impl fmt::Display for EncodingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EncodingType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SSH" => Ok(EncodingType::Ssh),
            "PEM" => Ok(EncodingType::Pem),
            other => Err(unknown("EncodingType", other)),
        }
    }
}

/// Granularity of access-advisor data in a generated report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessAdvisorUsageGranularityType {
    #[serde(rename = "SERVICE_LEVEL")]
    ServiceLevel,
    #[serde(rename = "ACTION_LEVEL")]
    ActionLevel,
}

impl AccessAdvisorUsageGranularityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessAdvisorUsageGranularityType::ServiceLevel => "SERVICE_LEVEL",
            AccessAdvisorUsageGranularityType::ActionLevel => "ACTION_LEVEL",
        }
    }
}

impl fmt::Display for AccessAdvisorUsageGranularityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessAdvisorUsageGranularityType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SERVICE_LEVEL" => Ok(AccessAdvisorUsageGranularityType::ServiceLevel),
            "ACTION_LEVEL" => Ok(AccessAdvisorUsageGranularityType::ActionLevel),
            other => Err(unknown("AccessAdvisorUsageGranularityType", other)),
        }
    }
}

/// Keys of the account summary map returned by GetAccountSummary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SummaryKeyType {
    Users,
    UsersQuota,
    Groups,
    GroupsQuota,
    ServerCertificates,
    ServerCertificatesQuota,
    UserPolicySizeQuota,
    GroupPolicySizeQuota,
    GroupsPerUserQuota,
    SigningCertificatesPerUserQuota,
    AccessKeysPerUserQuota,
    #[serde(rename = "MFADevices")]
    MfaDevices,
    #[serde(rename = "MFADevicesInUse")]
    MfaDevicesInUse,
    #[serde(rename = "AccountMFAEnabled")]
    AccountMfaEnabled,
    AccountAccessKeysPresent,
    AccountSigningCertificatesPresent,
    AttachedPoliciesPerGroupQuota,
    AttachedPoliciesPerRoleQuota,
    AttachedPoliciesPerUserQuota,
    Policies,
    PoliciesQuota,
    PolicySizeQuota,
    PolicyVersionsInUse,
    PolicyVersionsInUseQuota,
    VersionsPerPolicyQuota,
    GlobalEndpointTokenVersion,
}

impl SummaryKeyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryKeyType::Users => "Users",
            SummaryKeyType::UsersQuota => "UsersQuota",
            SummaryKeyType::Groups => "Groups",
            SummaryKeyType::GroupsQuota => "GroupsQuota",
            SummaryKeyType::ServerCertificates => "ServerCertificates",
            SummaryKeyType::ServerCertificatesQuota => "ServerCertificatesQuota",
            SummaryKeyType::UserPolicySizeQuota => "UserPolicySizeQuota",
            SummaryKeyType::GroupPolicySizeQuota => "GroupPolicySizeQuota",
            SummaryKeyType::GroupsPerUserQuota => "GroupsPerUserQuota",
            SummaryKeyType::SigningCertificatesPerUserQuota => {
                "SigningCertificatesPerUserQuota"
            }
            SummaryKeyType::AccessKeysPerUserQuota => "AccessKeysPerUserQuota",
            SummaryKeyType::MfaDevices => "MFADevices",
            SummaryKeyType::MfaDevicesInUse => "MFADevicesInUse",
            SummaryKeyType::AccountMfaEnabled => "AccountMFAEnabled",
            SummaryKeyType::AccountAccessKeysPresent => "AccountAccessKeysPresent",
            SummaryKeyType::AccountSigningCertificatesPresent => {
                "AccountSigningCertificatesPresent"
            }
            SummaryKeyType::AttachedPoliciesPerGroupQuota => "AttachedPoliciesPerGroupQuota",
            SummaryKeyType::AttachedPoliciesPerRoleQuota => "AttachedPoliciesPerRoleQuota",
            SummaryKeyType::AttachedPoliciesPerUserQuota => "AttachedPoliciesPerUserQuota",
            SummaryKeyType::Policies => "Policies",
            SummaryKeyType::PoliciesQuota => "PoliciesQuota",
            SummaryKeyType::PolicySizeQuota => "PolicySizeQuota",
            SummaryKeyType::PolicyVersionsInUse => "PolicyVersionsInUse",
            SummaryKeyType::PolicyVersionsInUseQuota => "PolicyVersionsInUseQuota",
            SummaryKeyType::VersionsPerPolicyQuota => "VersionsPerPolicyQuota",
            SummaryKeyType::GlobalEndpointTokenVersion => "GlobalEndpointTokenVersion",
        }
    }

    /// Every key, in the service's published order.
    pub fn values() -> &'static [SummaryKeyType] {
        &[
            SummaryKeyType::Users,
            SummaryKeyType::UsersQuota,
            SummaryKeyType::Groups,
            SummaryKeyType::GroupsQuota,
            SummaryKeyType::ServerCertificates,
            SummaryKeyType::ServerCertificatesQuota,
            SummaryKeyType::UserPolicySizeQuota,
            SummaryKeyType::GroupPolicySizeQuota,
            SummaryKeyType::GroupsPerUserQuota,
            SummaryKeyType::SigningCertificatesPerUserQuota,
            SummaryKeyType::AccessKeysPerUserQuota,
            SummaryKeyType::MfaDevices,
            SummaryKeyType::MfaDevicesInUse,
            SummaryKeyType::AccountMfaEnabled,
            SummaryKeyType::AccountAccessKeysPresent,
            SummaryKeyType::AccountSigningCertificatesPresent,
            SummaryKeyType::AttachedPoliciesPerGroupQuota,
            SummaryKeyType::AttachedPoliciesPerRoleQuota,
            SummaryKeyType::AttachedPoliciesPerUserQuota,
            SummaryKeyType::Policies,
            SummaryKeyType::PoliciesQuota,
            SummaryKeyType::PolicySizeQuota,
            SummaryKeyType::PolicyVersionsInUse,
            SummaryKeyType::PolicyVersionsInUseQuota,
            SummaryKeyType::VersionsPerPolicyQuota,
            SummaryKeyType::GlobalEndpointTokenVersion,
        ]
    }
}

impl fmt::Display for SummaryKeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SummaryKeyType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SummaryKeyType::values()
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| unknown("SummaryKeyType", s))
    }
}

fn unknown(kind: &'static str, value: &str) -> ValidationError {
    ValidationError::UnknownEnumValue { kind, value: value.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_type_roundtrip() {
        for v in [StatusType::Active, StatusType::Inactive] {
            assert_eq!(v.as_str().parse::<StatusType>().unwrap(), v);
        }
        assert!("active".parse::<StatusType>().is_err());
    }

    #[test]
    fn test_policy_scope_wire_strings() {
        assert_eq!(PolicyScopeType::Aws.as_str(), "AWS");
        assert_eq!(serde_json::to_string(&PolicyScopeType::Aws).unwrap(), "\"AWS\"");
        assert_eq!(
            serde_json::from_str::<PolicyScopeType>("\"Local\"").unwrap(),
            PolicyScopeType::Local
        );
    }

    #[test]
    fn test_job_status_wire_strings() {
        assert_eq!(JobStatusType::InProgress.as_str(), "IN_PROGRESS");
        assert_eq!(
            serde_json::from_str::<JobStatusType>("\"COMPLETED\"").unwrap(),
            JobStatusType::Completed
        );
    }

    #[test]
    fn test_report_format_single_value() {
        assert_eq!(ReportFormatType::TextCsv.to_string(), "text/csv");
        assert_eq!("text/csv".parse::<ReportFormatType>().unwrap(), ReportFormatType::TextCsv);
    }

    #[test]
    fn test_summary_key_acronym_renames() {
        assert_eq!(SummaryKeyType::MfaDevices.as_str(), "MFADevices");
        assert_eq!(SummaryKeyType::AccountMfaEnabled.as_str(), "AccountMFAEnabled");
        assert_eq!(
            serde_json::to_string(&SummaryKeyType::MfaDevicesInUse).unwrap(),
            "\"MFADevicesInUse\""
        );
    }

    #[test]
    fn test_summary_keys_all_parse() {
        for key in SummaryKeyType::values() {
            assert_eq!(&key.as_str().parse::<SummaryKeyType>().unwrap(), key);
        }
    }

    #[test]
    fn test_decision_lowercase_wire_strings() {
        assert_eq!(PolicyEvaluationDecisionType::ExplicitDeny.as_str(), "explicitDeny");
        assert_eq!(PolicySourceType::AwsManaged.as_str(), "aws-managed");
        assert_eq!(ContextKeyTypeEnum::StringList.as_str(), "stringList");
    }

    #[test]
    fn test_unknown_value_error_names_kind() {
        let err = "bogus".parse::<EntityType>().unwrap_err();
        assert_eq!(
            err,
            crate::error::ValidationError::UnknownEnumValue {
                kind: "EntityType",
                value: "bogus".to_string()
            }
        );
    }
}
