//! Plain presence checks: the guard-style idioms that predate combinators.

use crate::user::User;

/// Reports the length of a message, or that no message was given.
pub fn describe_message(message: Option<&str>) -> String {
    match message {
        Some(msg) => format!("Message length: {}", msg.len()),
        None => "Message is null".to_string(),
    }
}

/// Reads a user's name with explicit nested guards. Both the user and its
/// name must be present for the name branch to be taken.
pub fn describe_user_name(user: Option<&User>) -> String {
    if let Some(u) = user {
        if let Some(name) = u.name.as_deref() {
            return format!("User's name: {}", name);
        }
    }
    "User or name is null".to_string()
}

/// Equality that treats two absent values as equal and an absent/present
/// pair as unequal, without panicking on either side.
pub fn null_safe_eq(a: Option<&str>, b: Option<&str>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

pub fn describe_equality(a: Option<&str>, b: Option<&str>) -> String {
    format!("Are the strings equal? {}", null_safe_eq(a, b))
}
