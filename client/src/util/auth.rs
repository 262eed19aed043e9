//! Auth provider operations and shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call `login` / `signup` / `logout` here rather than `net::api`
//! directly: each performs exactly one HTTP call and then updates the
//! `RwSignal<AuthState>` context. Credential validation runs first so bad
//! input never reaches the network.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::api::{self, ApiError};
use crate::net::types::{Credentials, User};
use crate::state::auth::AuthState;

/// Minimum accepted password length, in characters.
pub const PASSWORD_MIN_LEN: usize = 8;

pub const MISSING_FIELDS_MESSAGE: &str = "Email and password are required";
pub const SHORT_PASSWORD_MESSAGE: &str = "Password must be at least 8 characters";

/// Validate form input before any request is made.
///
/// # Errors
///
/// Returns the message to show when the email or password is empty, or the
/// password is shorter than [`PASSWORD_MIN_LEN`].
pub fn validate_credentials(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS_MESSAGE);
    }
    if password.chars().count() < PASSWORD_MIN_LEN {
        return Err(SHORT_PASSWORD_MESSAGE);
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

/// Whether a protected route should bounce to `/login`.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Log in and record the user.
///
/// # Errors
///
/// Propagates the [`ApiError`]; the session state is left unchanged.
pub async fn login(auth: RwSignal<AuthState>, credentials: Credentials) -> Result<User, ApiError> {
    let user = api::login(&credentials).await?;
    auth.update(|a| a.sign_in(user.clone()));
    Ok(user)
}

/// Create an account and record the user.
///
/// # Errors
///
/// Propagates the [`ApiError`]; the session state is left unchanged.
pub async fn signup(auth: RwSignal<AuthState>, credentials: Credentials) -> Result<User, ApiError> {
    let user = api::signup(&credentials).await?;
    auth.update(|a| a.sign_in(user.clone()));
    Ok(user)
}

/// End the session and forget the user.
///
/// # Errors
///
/// Propagates the [`ApiError`]; the user stays signed in locally.
pub async fn logout(auth: RwSignal<AuthState>) -> Result<(), ApiError> {
    api::logout().await?;
    auth.update(AuthState::sign_out);
    Ok(())
}

/// Re-check the session cookie; any failure clears the user.
pub async fn refresh_me(auth: RwSignal<AuthState>) -> Option<User> {
    let user = api::fetch_current_user().await.ok();
    auth.update(|a| a.apply_refresh(user.clone()));
    user
}

/// Run the startup session check, clearing `loading` when it settles.
pub fn spawn_session_check(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = refresh_me(auth).await;
        if user.is_none() {
            leptos::logging::log!("session check: not signed in");
        }
        auth.update(AuthState::finish_loading);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}
