//! Email + password form shared by the login and signup pages.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::validate_credentials;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

impl AuthMode {
    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Signup => "Sign up",
        }
    }

    pub fn submit_label(self, busy: bool) -> &'static str {
        match (self, busy) {
            (Self::Login, false) => "Login",
            (Self::Login, true) => "Logging in...",
            (Self::Signup, false) => "Create account",
            (Self::Signup, true) => "Creating account...",
        }
    }

    /// Message shown when the server gives no reason.
    pub fn fallback_error(self) -> &'static str {
        match self {
            Self::Login => "Login failed",
            Self::Signup => "Signup failed",
        }
    }

    /// `(prompt, link text, href)` pointing at the other page.
    pub fn cross_link(self) -> (&'static str, &'static str, &'static str) {
        match self {
            Self::Login => ("No account yet?", "Sign up", "/signup"),
            Self::Signup => ("Already have an account?", "Login", "/login"),
        }
    }
}

#[component]
pub fn AuthForm(mode: AuthMode) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = match validate_credentials(&email.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = match mode {
                    AuthMode::Login => crate::util::auth::login(auth, credentials).await,
                    AuthMode::Signup => crate::util::auth::signup(auth, credentials).await,
                };
                busy.set(false);
                match result {
                    Ok(_) => navigate("/dashboard", leptos_router::NavigateOptions::default()),
                    Err(e) => {
                        leptos::logging::warn!("{} failed: {e}", mode.title());
                        error.set(Some(e.user_message(mode.fallback_error())));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, auth, &navigate);
        }
    };

    let (prompt, link_text, link_href) = mode.cross_link();
    let password_autocomplete = if mode == AuthMode::Login { "current-password" } else { "new-password" };

    view! {
        <div class="page page--centered">
            <form class="auth-card" on:submit=on_submit>
                <h1>{mode.title()}</h1>
                <input
                    class="auth-card__input"
                    type="email"
                    placeholder="you@example.com"
                    autocomplete="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="auth-card__input"
                    type="password"
                    placeholder="Password"
                    autocomplete=password_autocomplete
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <Show when=move || error.get().is_some()>
                    <p class="banner banner--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || mode.submit_label(busy.get())}
                </button>
                <p class="auth-card__switch">
                    {prompt}
                    " "
                    <a href=link_href>{link_text}</a>
                </p>
            </form>
        </div>
    }
}
