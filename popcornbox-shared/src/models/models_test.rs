//! Tests for the persisted record shapes.

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use crate::models::*;

    fn fields(value: serde_json::Value) -> RecordFields {
        match value {
            serde_json::Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn test_user_profile_keeps_unknown_fields() {
        let raw = r#"{"name":"Ada","email":"ada@example.com","avatar":"/a.png","age":36}"#;
        let user: UserProfile = serde_json::from_str(raw).unwrap();
        assert_eq!(user.name(), Some("Ada"));
        assert_eq!(user.fields.get("avatar"), Some(&json!("/a.png")));

        let back: serde_json::Value = serde_json::to_value(&user).unwrap();
        assert_eq!(back, serde_json::from_str::<serde_json::Value>(raw).unwrap());
    }

    #[test]
    fn test_user_profile_display_name() {
        let user = UserProfile::with_email("grace@example.com");
        assert_eq!(user.display_name(), Some("grace"));

        let named = user.with_field("name", "Grace");
        assert_eq!(named.display_name(), Some("Grace"));

        assert_eq!(UserProfile::default().display_name(), None);
    }

    #[test]
    fn test_user_profile_with_structured_name() {
        let raw = r#"{"name":{"first":"Ada","last":"Lovelace"},"email":"ada@example.com"}"#;
        let user: UserProfile = serde_json::from_str(raw).unwrap();
        assert_eq!(user.name(), None);
        assert_eq!(user.email(), Some("ada@example.com"));
        assert_eq!(user.display_name(), Some("ada"));
        assert_eq!(user.fields.get("name"), Some(&json!({"first": "Ada", "last": "Lovelace"})));
    }

    #[test]
    fn test_session_serializes_signed_at_last() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let session = Session::new(fields(json!({"token": "abc"})), at);
        let text = serde_json::to_string(&session).unwrap();
        assert_eq!(text, r#"{"token":"abc","signedAt":"2024-05-01T12:30:00.000Z"}"#);
    }

    #[test]
    fn test_session_discards_caller_signed_at() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let session = Session::new(
            fields(json!({"token": "abc", "signedAt": "1999-01-01T00:00:00.000Z"})),
            at,
        );
        assert_eq!(session.signed_at(), Some(at));
        assert!(!session.fields.contains_key(SIGNED_AT_FIELD));
        assert_eq!(session.field_str("token"), Some("abc"));
    }

    #[test]
    fn test_session_without_signed_at_is_still_a_session() {
        let session: Session = serde_json::from_str(r#"{"token":"abc"}"#).unwrap();
        assert_eq!(session.signed_at(), None);
        assert_eq!(session.field_str("token"), Some("abc"));
    }

    #[test]
    fn test_session_keeps_unreadable_signed_at() {
        let raw = r#"{"token":"abc","signedAt":"sometime last week"}"#;
        let session: Session = serde_json::from_str(raw).unwrap();
        assert_eq!(session.signed_at(), None);
        assert_eq!(serde_json::to_string(&session).unwrap(), raw);
    }

    #[test]
    fn test_session_reads_epoch_millis() {
        let session: Session =
            serde_json::from_str(r#"{"token":"abc","signedAt":1714566600000}"#).unwrap();
        assert_eq!(
            session.signed_at(),
            Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_remembered_user_lifts_auto_login_flag() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let remembered = RememberedUser::new(
            fields(json!({"email": "ada@example.com", "autoLogin": true, "rememberAt": "x"})),
            at,
        );
        assert_eq!(remembered.auto_login(), Some(true));
        assert_eq!(remembered.remember_at(), Some(at));
        assert_eq!(remembered.credentials.len(), 1);
        assert_eq!(remembered.field_str("email"), Some("ada@example.com"));

        let text = serde_json::to_string(&remembered).unwrap();
        assert_eq!(
            text,
            r#"{"email":"ada@example.com","rememberAt":"2024-05-01T12:30:00.000Z","autoLogin":true}"#
        );
    }

    #[test]
    fn test_remembered_user_without_flag_allows_auto_login() {
        let remembered: RememberedUser =
            serde_json::from_str(r#"{"email":"a@b.c","rememberAt":"2024-05-01T12:30:00.000Z"}"#)
                .unwrap();
        assert_eq!(remembered.auto_login(), None);
        assert!(remembered.auto_login_enabled());
        assert!(!serde_json::to_string(&remembered).unwrap().contains(AUTO_LOGIN_FIELD));

        let mut disabled = remembered;
        disabled.set_auto_login(false);
        assert!(!disabled.auto_login_enabled());
    }

    #[test]
    fn test_remembered_user_with_odd_auto_login_is_readable() {
        let raw = r#"{"email":"a@b.c","autoLogin":"yes","rememberAt":1714566600000}"#;
        let remembered: RememberedUser = serde_json::from_str(raw).unwrap();
        assert_eq!(remembered.auto_login(), None);
        assert!(remembered.auto_login_enabled());
        assert!(remembered.remember_at().is_some());
        assert_eq!(remembered.field_str("email"), Some("a@b.c"));
    }

    #[test]
    fn test_remembered_user_new_drops_non_boolean_flag() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let remembered = RememberedUser::new(fields(json!({"email": "a@b.c", "autoLogin": "yes"})), at);
        assert_eq!(remembered.auto_login(), None);
        assert!(!serde_json::to_string(&remembered).unwrap().contains(AUTO_LOGIN_FIELD));
    }

    #[test]
    fn test_item_id_accepts_numbers_and_strings() {
        let items: Vec<WishlistItem> =
            serde_json::from_str(r#"[{"id":550,"title":"Fight Club"},{"id":"tt0133093"}]"#).unwrap();
        assert_eq!(items[0].id, Some(ItemId::from(550)));
        assert!(matches!(items[0].id, Some(ItemId::Number(_))));
        assert_eq!(items[0].title(), Some("Fight Club"));
        assert_eq!(items[1].id, Some(ItemId::from("tt0133093")));
    }

    #[test]
    fn test_item_id_accepts_any_json_value() {
        let raw = r#"[{"id":12.5},{"id":true},{"id":18446744073709551615},{"id":[1,2]},{"id":null}]"#;
        let items: Vec<WishlistItem> = serde_json::from_str(raw).unwrap();
        assert_eq!(items.len(), 5);
        assert!(matches!(items[0].id, Some(ItemId::Number(_))));
        assert_eq!(items[1].id, Some(ItemId::Flag(true)));
        assert_eq!(items[2].identity().map(ToString::to_string), Some("18446744073709551615".to_string()));
        assert_eq!(items[3].id, Some(ItemId::Other(json!([1, 2]))));
        assert_eq!(items[4].id, None);

        let back: serde_json::Value = serde_json::to_value(&items).unwrap();
        assert_eq!(
            back,
            json!([{"id":12.5},{"id":true},{"id":18_446_744_073_709_551_615_u64},{"id":[1,2]},{}])
        );
    }

    #[test]
    fn test_blank_ids_have_no_identity() {
        assert!(WishlistItem::new(0).identity().is_none());
        assert!(WishlistItem::new("").identity().is_none());
        assert!(WishlistItem::default().identity().is_none());
        assert!(WishlistItem::new(ItemId::Flag(false)).identity().is_none());
        let zero: WishlistItem = serde_json::from_str(r#"{"id":0.0}"#).unwrap();
        assert!(zero.identity().is_none());
        assert_eq!(WishlistItem::new(7).identity(), Some(&ItemId::from(7)));
    }

    #[test]
    fn test_wishlist_item_round_trips_details() {
        let item = WishlistItem::new(603)
            .with_field("title", "The Matrix")
            .with_field("vote_average", 8.2);
        let text = serde_json::to_string(&item).unwrap();
        let back: WishlistItem = serde_json::from_str(&text).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_item_id_display() {
        assert_eq!(ItemId::from(42).to_string(), "42");
        assert_eq!(ItemId::from(String::from("abc")).to_string(), "abc");
    }
}
