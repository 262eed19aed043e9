//! Landing page.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="page home-page">
            <h1>"Image Processor"</h1>
            <p class="home-page__blurb">
                "Resize, convert, and compress images in bulk. Pick a preset for social media or print, "
                "tune format and quality, and download the results one by one or as a ZIP."
            </p>
            <div class="home-page__actions">
                <Show
                    when=move || auth.get().is_authenticated()
                    fallback=|| {
                        view! {
                            <a class="btn btn--primary" href="/login">"Login"</a>
                            <a class="btn" href="/signup">"Sign up"</a>
                        }
                    }
                >
                    <a class="btn btn--primary" href="/dashboard">"Go to Dashboard"</a>
                </Show>
            </div>
        </div>
    }
}
