//! Account creation page.

use leptos::prelude::*;

use super::auth_form::{AuthForm, AuthMode};

#[component]
pub fn SignupPage() -> impl IntoView {
    view! { <AuthForm mode=AuthMode::Signup/> }
}
