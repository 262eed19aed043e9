//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<AuthState>` at the app root. Route guards and
//! user-aware components read it; `util::auth` performs the HTTP calls and
//! applies their outcomes through the transitions below.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
///
/// `loading` is true only while the startup session check is in flight.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// State at app start, before the session check has answered.
    pub fn initial() -> Self {
        Self { user: None, loading: true }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.email.as_str())
    }

    /// Record a successful login, signup, or session check.
    pub fn sign_in(&mut self, user: User) {
        self.user = Some(user);
    }

    /// Forget the user after logout or a failed session check.
    pub fn sign_out(&mut self) {
        self.user = None;
    }

    /// Apply the outcome of a session refresh.
    pub fn apply_refresh(&mut self, user: Option<User>) {
        self.user = user;
    }

    pub fn finish_loading(&mut self) {
        self.loading = false;
    }
}
