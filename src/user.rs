//! User model.

use serde::{Deserialize, Serialize};

/// A user whose display name may be absent.
///
/// The optional field round-trips through JSON `null`, so a missing name is
/// representable both in memory and on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: Option<String>,
}

impl User {
    /// Creates a user with a known display name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// Creates a user whose name was never provided.
    pub fn anonymous() -> Self {
        Self { name: None }
    }
}
