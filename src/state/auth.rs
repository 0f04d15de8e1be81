//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written by the session event stream, read by the navigation gate and by
//! user-aware components. The gate never inspects `user` directly; it asks
//! for a [`nav::resolve::AuthStatus`] snapshot.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use nav::resolve::AuthStatus;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
///
/// Starts loading: nothing is known about the session until the identity
/// stream's first emission, and the gate holds rendering rather than guess.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// Record an identity emission. Any emission settles the unknown state,
    /// including `None` for "no session".
    pub fn apply(&mut self, user: Option<User>) {
        self.user = user;
        self.loading = false;
    }

    /// The immutable snapshot the redirect resolver consumes.
    #[must_use]
    pub fn status(&self) -> AuthStatus {
        if self.loading {
            AuthStatus::Loading
        } else if self.user.is_some() {
            AuthStatus::SignedIn
        } else {
            AuthStatus::SignedOut
        }
    }
}
