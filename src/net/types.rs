//! Wire types for the auth and session endpoints.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in user as the server reports it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name shown in the shell.
    pub name: String,
    /// Address the account is registered under.
    pub email: String,
    /// Avatar image URL, if available.
    pub avatar_url: Option<String>,
}

/// Email + password pair submitted by the entry forms.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// One emission of the session event stream: whoever the server currently
/// considers signed in, absent when the session ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionEvent {
    #[serde(default)]
    pub user: Option<User>,
}
