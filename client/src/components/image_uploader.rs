//! Multi-file image picker with thumbnails.
//!
//! SYSTEM CONTEXT
//! ==============
//! Files chosen here are read into memory immediately so the dashboard state
//! stays `Send + Sync` and the upload can be rebuilt from bytes. Each file
//! gets a small data-URL thumbnail; when the canvas cannot decode it the
//! original bytes are used as the preview instead.

#[cfg(test)]
#[path = "image_uploader_test.rs"]
mod image_uploader_test;

use leptos::prelude::*;

use crate::state::dashboard::DashboardState;

/// Longest thumbnail edge, in pixels.
pub const THUMBNAIL_EDGE: u32 = 160;

/// Whether a picked file should be kept. An empty type is allowed; browsers
/// leave it blank for some valid images.
pub fn accepts_mime(mime: &str) -> bool {
    mime.is_empty() || mime.starts_with("image/")
}

pub fn selection_summary(count: usize) -> String {
    match count {
        0 => "No images selected".to_owned(),
        1 => "1 image selected".to_owned(),
        n => format!("{n} images selected"),
    }
}

#[component]
pub fn ImageUploader() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let reading = RwSignal::new(false);

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                return;
            };
            let Some(list) = input.files() else {
                return;
            };
            let picked: Vec<web_sys::File> = (0..list.length())
                .filter_map(|i| list.get(i))
                .filter(|f| accepts_mime(&f.type_()))
                .collect();
            reading.set(true);
            leptos::task::spawn_local(async move {
                let mut files = Vec::with_capacity(picked.len());
                for file in picked {
                    match read_file(&file).await {
                        Ok(selected) => files.push(selected),
                        Err(e) => leptos::logging::warn!("could not read {}: {e}", file.name()),
                    }
                }
                dashboard.update(|d| d.set_files(files));
                reading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, dashboard, reading);
        }
    };

    view! {
        <section class="uploader">
            <label class="uploader__picker">
                <span>"Select images"</span>
                <input type="file" accept="image/*" multiple on:change=on_change/>
            </label>
            <p class="uploader__summary">
                {move || {
                    if reading.get() {
                        "Reading files...".to_owned()
                    } else {
                        selection_summary(dashboard.with(|d| d.files.len()))
                    }
                }}
            </p>
            <ul class="uploader__thumbs">
                <For
                    each=move || {
                        dashboard.with(|d| {
                            d.files
                                .iter()
                                .enumerate()
                                .map(|(i, f)| (i, f.name.clone(), f.preview.clone()))
                                .collect::<Vec<_>>()
                        })
                    }
                    key=|(i, name, _)| (*i, name.clone())
                    children=move |(_, name, preview)| {
                        view! {
                            <li class="uploader__thumb" title=name.clone()>
                                {preview.map(|src| view! { <img src=src alt=name.clone()/> })}
                                <span class="uploader__thumb-name">{name.clone()}</span>
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}

#[cfg(feature = "hydrate")]
async fn read_file(file: &web_sys::File) -> Result<crate::state::dashboard::SelectedFile, String> {
    use crate::state::options::OutputFormat;
    use crate::util::data_url::{self, ReencodeTarget};

    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{e:?}"))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let mime = match file.type_() {
        t if t.is_empty() => data_url::sniff_mime(&bytes).to_owned(),
        t => t,
    };

    let original = data_url::encode(&bytes, &mime);
    let target = ReencodeTarget { format: OutputFormat::Webp, quality: 70, max_edge: Some(THUMBNAIL_EDGE) };
    let preview = match data_url::reencode(&original, target).await {
        Ok(thumb) => thumb,
        Err(e) => {
            leptos::logging::warn!("thumbnail for {} fell back to original: {e}", file.name());
            original
        }
    };

    Ok(crate::state::dashboard::SelectedFile { name: file.name(), mime, bytes: bytes.into(), preview: Some(preview) })
}
