//! Wire-shape properties for request and result serialization

use proptest::prelude::*;

use iam_model::entities::{Tag, User};
use iam_model::operations::{CreateUserRequest, ListUsersRequest, ListUsersResult};
use iam_types::{Paginated, Validate};

fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9+=,.@_-]{1,64}"
}

fn path_strategy() -> impl Strategy<Value = String> {
    "/([a-z0-9_]{1,10}/){1,3}"
}

proptest! {
    /// Any name within the published character set serializes under the
    /// exact field name and survives a JSON round-trip.
    #[test]
    fn prop_create_user_roundtrip(name in name_strategy(), path in path_strategy()) {
        let request = CreateUserRequest {
            user_name: Some(name.clone()),
            path: Some(path),
            ..Default::default()
        };
        prop_assert!(request.validate().is_ok());

        let json = serde_json::to_value(&request).unwrap();
        prop_assert_eq!(json["UserName"].as_str(), Some(name.as_str()));

        let back: CreateUserRequest = serde_json::from_value(json).unwrap();
        prop_assert_eq!(back, request);
    }

    /// Unset fields never appear in the serialized form.
    #[test]
    fn prop_none_fields_are_skipped(name in name_strategy()) {
        let request = CreateUserRequest {
            user_name: Some(name),
            ..Default::default()
        };
        let json = serde_json::to_value(&request).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        prop_assert_eq!(keys, vec!["UserName"]);
    }

    /// A result is truncated exactly when the wire says so; a missing
    /// IsTruncated reads as complete.
    #[test]
    fn prop_truncation_reflects_wire(flag in proptest::option::of(any::<bool>())) {
        let result = ListUsersResult {
            users: Some(vec![]),
            is_truncated: flag,
            marker: flag.unwrap_or(false).then(|| "AAAB".to_string()),
        };
        prop_assert_eq!(result.is_truncated(), flag.unwrap_or(false));
    }

    /// Tag lists survive serialization in order.
    #[test]
    fn prop_tag_order_preserved(keys in proptest::collection::vec("[a-z]{1,16}", 1..8)) {
        let tags: Vec<Tag> = keys.iter().map(|k| Tag::new(k, "v")).collect();
        let user = User { tags: Some(tags.clone()), ..Default::default() };
        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back.tags.unwrap(), tags);
    }

    /// Pagination inputs inside the documented bounds always validate.
    #[test]
    fn prop_valid_pagination_accepted(max_items in 1i32..=1000, marker in "[ -~]{1,64}") {
        let request = ListUsersRequest {
            marker: Some(marker),
            max_items: Some(max_items),
            ..Default::default()
        };
        prop_assert!(request.validate().is_ok());
    }

    /// Pagination inputs outside the documented bounds never validate.
    #[test]
    fn prop_out_of_range_max_items_rejected(max_items in prop_oneof![Just(0i32), 1001i32..10000]) {
        let request = ListUsersRequest {
            max_items: Some(max_items),
            ..Default::default()
        };
        prop_assert!(request.validate().is_err());
    }
}
