//! Round-trip properties for the service enum types

use proptest::prelude::*;
use iam_types::enums::*;

fn status_strategy() -> impl Strategy<Value = StatusType> {
    prop_oneof![Just(StatusType::Active), Just(StatusType::Inactive)]
}

fn summary_key_strategy() -> impl Strategy<Value = SummaryKeyType> {
    proptest::sample::select(SummaryKeyType::values())
}

proptest! {
    /// as_str -> FromStr is the identity for StatusType
    #[test]
    fn prop_status_type_roundtrip(v in status_strategy()) {
        prop_assert_eq!(v.as_str().parse::<StatusType>().unwrap(), v);
    }

    /// Display and as_str agree
    #[test]
    fn prop_status_type_display_matches(v in status_strategy()) {
        prop_assert_eq!(v.to_string(), v.as_str());
    }

    /// serde and as_str carry the same wire string
    #[test]
    fn prop_summary_key_serde_matches_as_str(key in summary_key_strategy()) {
        let json = serde_json::to_string(&key).unwrap();
        prop_assert_eq!(json, format!("\"{}\"", key.as_str()));
    }

    /// JSON round-trip preserves the key
    #[test]
    fn prop_summary_key_json_roundtrip(key in summary_key_strategy()) {
        let json = serde_json::to_string(&key).unwrap();
        let back: SummaryKeyType = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, key);
    }

    /// Strings outside the value set never parse; every legal value
    /// contains an uppercase letter, so lowercase input always fails.
    #[test]
    fn prop_unknown_strings_rejected(s in "[a-z]{1,12}") {
        prop_assert!(s.parse::<SummaryKeyType>().is_err());
    }
}

#[test]
fn test_every_enum_rejects_empty_string() {
    assert!("".parse::<StatusType>().is_err());
    assert!("".parse::<AssignmentStatusType>().is_err());
    assert!("".parse::<PolicyScopeType>().is_err());
    assert!("".parse::<PolicyUsageType>().is_err());
    assert!("".parse::<EntityType>().is_err());
    assert!("".parse::<ReportFormatType>().is_err());
    assert!("".parse::<ReportStateType>().is_err());
    assert!("".parse::<JobStatusType>().is_err());
    assert!("".parse::<SortKeyType>().is_err());
    assert!("".parse::<PolicyEvaluationDecisionType>().is_err());
    assert!("".parse::<PolicySourceType>().is_err());
    assert!("".parse::<ContextKeyTypeEnum>().is_err());
    assert!("".parse::<DeletionTaskStatusType>().is_err());
    assert!("".parse::<PolicyOwnerEntityType>().is_err());
    assert!("".parse::<PolicyType>().is_err());
    assert!("".parse::<PermissionsBoundaryAttachmentType>().is_err());
    assert!("".parse::<GlobalEndpointTokenVersion>().is_err());
    assert!("".parse::<EncodingType>().is_err());
    assert!("".parse::<AccessAdvisorUsageGranularityType>().is_err());
    assert!("".parse::<SummaryKeyType>().is_err());
}
