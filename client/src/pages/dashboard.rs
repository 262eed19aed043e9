//! Dashboard page: upload, configure, process, and collect results.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated working route. It owns the processing run:
//! one multipart POST per click, then either an immediate download (single
//! file) or an unpacked ZIP shown in the batch preview (several files).
//!
//! Object URLs for previews and the archive link live in
//! `DashboardState`; they are revoked when results are cleared, when a new
//! run starts, and when this page unmounts.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::base64_tools::Base64Tools;
use crate::components::batch_preview::BatchPreview;
use crate::components::image_uploader::ImageUploader;
use crate::components::resize_options::ResizeOptions;
use crate::state::auth::AuthState;
use crate::state::dashboard::{DashboardState, Phase};

/// Status line under the action buttons.
pub fn status_text(phase: Phase, state: &DashboardState) -> Option<String> {
    match phase {
        Phase::Busy => Some(format!("Uploading {} file(s)...", state.files.len())),
        Phase::Done => state
            .single
            .as_ref()
            .map(|s| format!("Downloaded {}", s.name))
            .or_else(|| Some(format!("{} image(s) ready", state.results.len()))),
        Phase::Idle | Phase::Failed => None,
    }
}

/// Message for a response that could not be interpreted.
pub fn archive_error_message(err: &crate::util::archive::ArchiveError) -> String {
    format!("Could not read the returned archive: {err}")
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let dashboard = expect_context::<RwSignal<DashboardState>>();

    on_cleanup(move || {
        dashboard.try_update(DashboardState::clear_results);
    });

    let on_process = move |_| {
        let mut started = false;
        dashboard.update(|d| started = d.begin_run());
        if !started {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            use crate::net::api;
            use crate::state::dashboard::interpret_response;

            let (files, options) = dashboard.with_untracked(|d| (d.files.clone(), d.options.clone()));
            leptos::task::spawn_local(async move {
                let response = match api::process_images(&files, &options).await {
                    Ok(response) => response,
                    Err(e) => {
                        leptos::logging::warn!("process failed: {e}");
                        dashboard.update(|d| d.fail_run(api::processing_error_message(&e)));
                        return;
                    }
                };
                match interpret_response(files.len(), options.format, response) {
                    Ok(outcome) => {
                        let mut download = None;
                        dashboard.update(|d| download = d.complete_run(outcome));
                        if let Some(single) = download {
                            crate::util::download::trigger_download(&single.bytes, &single.mime, &single.name);
                        }
                    }
                    Err(e) => {
                        leptos::logging::warn!("archive unpack failed: {e}");
                        dashboard.update(|d| d.fail_run(archive_error_message(&e)));
                    }
                }
            });
        }
    };

    let on_download_again = move |_| {
        if let Some(single) = dashboard.with_untracked(|d| d.single.clone()) {
            crate::util::download::trigger_download(&single.bytes, &single.mime, &single.name);
        }
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::util::auth::logout(auth).await {
                Ok(()) => {
                    dashboard.update(|d| {
                        d.clear_results();
                        d.set_files(Vec::new());
                    });
                }
                Err(e) => leptos::logging::warn!("logout failed: {e}"),
            }
        });
    };

    view! {
        <div class="page dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Dashboard"</h1>
                <span class="dashboard-page__user">
                    {move || auth.get().email().map(str::to_owned).unwrap_or_default()}
                </span>
                <button class="btn" on:click=on_logout>"Logout"</button>
            </header>

            <div class="dashboard-page__columns">
                <div class="dashboard-page__inputs">
                    <ImageUploader/>
                    <ResizeOptions/>
                </div>
                <div class="dashboard-page__actions">
                    <button
                        class="btn btn--primary"
                        disabled=move || !dashboard.with(DashboardState::can_process)
                        on:click=on_process
                    >
                        {move || dashboard.with(DashboardState::process_label)}
                    </button>
                    <Show when=move || dashboard.with(|d| d.single.is_some())>
                        <button class="btn" on:click=on_download_again>"Download"</button>
                    </Show>
                    <button
                        class="btn"
                        disabled=move || dashboard.with(|d| d.busy)
                        on:click=move |_| dashboard.update(DashboardState::clear_results)
                    >
                        "Reset Results"
                    </button>
                    <Show when=move || dashboard.with(|d| d.error.is_some())>
                        <p class="banner banner--error">
                            {move || dashboard.with(|d| d.error.clone().unwrap_or_default())}
                        </p>
                    </Show>
                    <p class="dashboard-page__status">
                        {move || dashboard.with(|d| status_text(d.phase(), d).unwrap_or_default())}
                    </p>
                </div>
            </div>

            <BatchPreview/>
            <Base64Tools/>
        </div>
    }
}
