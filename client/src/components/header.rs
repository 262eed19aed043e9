//! Site header with navigation and the theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered on every route. Navigation links depend on the session: signed-in
//! users get a Dashboard link, everyone else gets Login / Sign up.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;

#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle_theme = move |_| {
        let current = ui.get_untracked().dark_mode;
        let next = crate::util::dark_mode::toggle(current);
        ui.update(|u| u.dark_mode = next);
    };

    view! {
        <header class="site-header">
            <a href="/" class="site-header__brand">"Image Processor"</a>
            <nav class="site-header__nav">
                <a href="/about">"About"</a>
                <Show
                    when=move || auth.get().is_authenticated()
                    fallback=|| {
                        view! {
                            <a href="/login">"Login"</a>
                            <a href="/signup">"Sign up"</a>
                        }
                    }
                >
                    <a href="/dashboard">"Dashboard"</a>
                </Show>
            </nav>
            <button
                class="btn site-header__theme-toggle"
                title="Toggle dark mode"
                on:click=on_toggle_theme
            >
                {move || ui.get().toggle_glyph()}
            </button>
        </header>
    }
}
