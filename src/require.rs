//! Required-value assertion, expressed as a `Result` instead of unwinding.

use thiserror::Error;

/// Assertion failure raised when a required value is absent.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct AssertionError(String);

/// Asserts that a value is present, or fails with the given message.
pub fn require_non_null<T>(value: Option<T>, message: &str) -> Result<T, AssertionError> {
    value.ok_or_else(|| AssertionError(message.to_owned()))
}

/// Asserts that a name was provided. The failure is recovered in this call
/// frame and rendered as a line; it never propagates to the caller.
pub fn describe_required_name(name: Option<&str>) -> String {
    match require_non_null(name, "Name cannot be null") {
        Ok(safe_name) => format!("Name: {}", safe_name),
        Err(e) => format!("Caught assertion failure: {}", e),
    }
}
