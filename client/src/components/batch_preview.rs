//! Preview grid for batch results plus the archive download link.

#[cfg(test)]
#[path = "batch_preview_test.rs"]
mod batch_preview_test;

use leptos::prelude::*;

use crate::state::dashboard::DashboardState;
use crate::util::archive::ARCHIVE_FILENAME;

pub fn results_heading(count: usize) -> String {
    format!("Results ({count})")
}

#[component]
pub fn BatchPreview() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let archive_url = move || dashboard.with(|d| d.archive.as_ref().map(|a| a.url.clone()));

    view! {
        <section class="batch-preview">
            <div class="batch-preview__header">
                <h3>{move || results_heading(dashboard.with(|d| d.results.len()))}</h3>
                {move || {
                    archive_url()
                        .map(|href| {
                            view! {
                                <a class="btn btn--primary" href=href download=ARCHIVE_FILENAME>
                                    "Download ZIP"
                                </a>
                            }
                        })
                }}
                <button
                    class="btn"
                    disabled=move || dashboard.with(|d| d.results.is_empty() && d.archive.is_none())
                    on:click=move |_| dashboard.update(DashboardState::clear_results)
                >
                    "Clear"
                </button>
            </div>
            <Show
                when=move || dashboard.with(|d| !d.results.is_empty())
                fallback=|| view! { <p class="batch-preview__empty">"No batch results yet."</p> }
            >
                <div class="batch-preview__grid">
                    <For
                        each=move || {
                            dashboard.with(|d| {
                                d.results.iter().map(|r| (r.name.clone(), r.url.clone())).collect::<Vec<_>>()
                            })
                        }
                        key=|(_, url)| url.clone()
                        children=|(name, url)| {
                            view! {
                                <figure class="batch-preview__item">
                                    <img src=url.clone() alt=name.clone()/>
                                    <figcaption>
                                        <a href=url download=name.clone()>{name.clone()}</a>
                                    </figcaption>
                                </figure>
                            }
                        }
                    />
                </div>
            </Show>
        </section>
    }
}
