use nullsafe::User;

#[test]
fn test_named_user_serializes_name() {
    let json = serde_json::to_string(&User::named("Shankar")).unwrap();
    assert_eq!(json, r#"{"name":"Shankar"}"#);
}

#[test]
fn test_anonymous_user_serializes_null() {
    let json = serde_json::to_string(&User::anonymous()).unwrap();
    assert_eq!(json, r#"{"name":null}"#);
}

#[test]
fn test_json_null_deserializes_to_absent_name() {
    let user: User = serde_json::from_str(r#"{"name":null}"#).unwrap();
    assert_eq!(user, User::anonymous());
}

#[test]
fn test_round_trip_preserves_presence() {
    for user in [User::named("Shankar Kumar"), User::anonymous()] {
        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }
}
