//! Pagination contract properties across the result surface

use proptest::prelude::*;

use iam_model::operations::{
    GetAccountAuthorizationDetailsResult, GetGroupResult, ListAccessKeysResult,
    ListAttachedRolePoliciesResult, ListGroupsResult, ListPoliciesResult, ListUsersResult,
    SimulatePolicyResponse,
};
use iam_types::Paginated;

fn marker_strategy() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[ -~]{1,320}")
}

macro_rules! pagination_contract {
    ($name:ident, $ty:ident) => {
        proptest! {
            /// is_truncated defaults to false and marker passes through
            /// untouched, regardless of payload.
            #[test]
            fn $name(flag in proptest::option::of(any::<bool>()), marker in marker_strategy()) {
                let result = $ty {
                    is_truncated: flag,
                    marker: marker.clone(),
                    ..Default::default()
                };
                prop_assert_eq!(result.is_truncated(), flag.unwrap_or(false));
                prop_assert_eq!(result.marker(), marker.as_deref());
            }
        }
    };
}

pagination_contract!(prop_list_users_contract, ListUsersResult);
pagination_contract!(prop_list_groups_contract, ListGroupsResult);
pagination_contract!(prop_get_group_contract, GetGroupResult);
pagination_contract!(prop_list_policies_contract, ListPoliciesResult);
pagination_contract!(prop_list_access_keys_contract, ListAccessKeysResult);
pagination_contract!(prop_list_attached_role_policies_contract, ListAttachedRolePoliciesResult);
pagination_contract!(prop_simulate_policy_contract, SimulatePolicyResponse);
pagination_contract!(prop_authorization_details_contract, GetAccountAuthorizationDetailsResult);

proptest! {
    /// The truncation flag round-trips through JSON without being
    /// normalized; an absent flag stays absent.
    #[test]
    fn prop_truncation_flag_wire_roundtrip(flag in proptest::option::of(any::<bool>())) {
        let result = ListUsersResult {
            is_truncated: flag,
            ..Default::default()
        };
        let json = serde_json::to_value(&result).unwrap();
        match flag {
            Some(b) => prop_assert_eq!(json["IsTruncated"].as_bool(), Some(b)),
            None => prop_assert!(json.get("IsTruncated").is_none()),
        }
        let back: ListUsersResult = serde_json::from_value(json).unwrap();
        prop_assert_eq!(back.is_truncated, flag);
    }
}
