//! Login page.

use leptos::prelude::*;

use super::auth_form::{AuthForm, AuthMode};

#[component]
pub fn LoginPage() -> impl IntoView {
    view! { <AuthForm mode=AuthMode::Login/> }
}
