//! `Option` combinator demonstrations: default substitution, mapping,
//! filtering, and two-branch dispatch.

use crate::user::User;

/// Walks a possibly-absent message through the basic combinators: default
/// substitution, presence-gated reporting, and mapping with a fallback.
///
/// An absent message yields exactly two lines; the presence-gated length
/// line appears only when a message was given.
pub fn describe_optional_message(message: Option<&str>) -> Vec<String> {
    let mut lines = Vec::new();

    let default_message = message.unwrap_or("Default Message");
    lines.push(format!("Message: {}", default_message));

    if let Some(msg) = message {
        lines.push(format!("Message length: {}", msg.len()));
    }

    let length = message.map(str::len);
    lines.push(format!("Message length (using map): {}", length.unwrap_or(0)));

    lines
}

/// Resolves a display name from an optional user, substituting a default
/// when either the user or its name is absent.
pub fn display_name(user: Option<&User>) -> String {
    user.and_then(|u| u.name.clone())
        .unwrap_or_else(|| "Default User".to_string())
}

pub fn describe_display_name(user: Option<&User>) -> String {
    format!("User's name: {}", display_name(user))
}

/// Two-branch dispatch over an optional user.
pub fn process_user(user: Option<&User>) -> String {
    match user {
        Some(u) => format!(
            "Processing user: {}",
            u.name.as_deref().unwrap_or("Default User")
        ),
        None => "No user provided".to_string(),
    }
}

/// Chains filter and map stages over an optional input. Any stage yielding
/// absent collapses the whole chain to the fallback line.
pub fn process_input(input: Option<&str>) -> String {
    input
        .filter(|s| s.len() > 5)
        .map(str::to_uppercase)
        .map(|s| format!("Processed: {}", s))
        .unwrap_or_else(|| "Input was invalid or null".to_string())
}
