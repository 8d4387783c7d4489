use nullsafe::{describe_required_name, require_non_null};

#[test]
fn test_present_value_passes_through() {
    let result = require_non_null(Some("Shankar"), "Name cannot be null");
    assert_eq!(result, Ok("Shankar"));
}

#[test]
fn test_absent_value_fails_with_message() {
    let result = require_non_null(None::<&str>, "Name cannot be null");
    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "Name cannot be null");
}

#[test]
fn test_present_name_is_rendered() {
    assert_eq!(describe_required_name(Some("Shankar")), "Name: Shankar");
}

#[test]
fn test_failure_is_recovered_in_place() {
    // The assertion never propagates; the caller sees only the rendered line.
    let line = describe_required_name(None);
    assert!(line.contains("Name cannot be null"));
    assert_eq!(line, "Caught assertion failure: Name cannot be null");
}
