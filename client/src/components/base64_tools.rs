//! Base64 encode/decode panel for processed images.
//!
//! SYSTEM CONTEXT
//! ==============
//! Encoding takes any finished result (batch item or the last single image)
//! and produces a data URL, optionally re-encoded through a canvas. Decoding
//! accepts a pasted data URL or bare base64 and turns it back into a preview
//! with a download link. Decoded previews own their object URL, which is
//! revoked on every new decode attempt and when the panel unmounts.

#[cfg(test)]
#[path = "base64_tools_test.rs"]
mod base64_tools_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::state::dashboard::DashboardState;
use crate::state::options::OutputFormat;
use crate::util::data_url;
use crate::util::object_url::ObjectUrls;

/// An image the encoder can read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodeSource {
    pub name: String,
    pub mime: String,
    pub bytes: Arc<[u8]>,
}

/// Everything currently encodable, batch items first.
pub fn encode_sources(state: &DashboardState) -> Vec<EncodeSource> {
    let mut sources: Vec<EncodeSource> = state
        .results
        .iter()
        .map(|r| EncodeSource { name: r.name.clone(), mime: r.mime.clone(), bytes: r.bytes.clone() })
        .collect();
    if let Some(single) = &state.single {
        sources.push(EncodeSource { name: single.name.clone(), mime: single.mime.clone(), bytes: single.bytes.clone() });
    }
    sources
}

/// Keep a picker index valid after the source list changes.
pub fn clamp_selection(index: usize, len: usize) -> usize {
    if index < len { index } else { 0 }
}

/// File extension for a decoded image's MIME type.
pub fn extension_for_mime(mime: &str) -> &'static str {
    match mime {
        "image/jpeg" | "image/jpg" => "jpg",
        "image/png" => "png",
        "image/webp" => "webp",
        "image/gif" => "gif",
        "image/bmp" => "bmp",
        _ => "bin",
    }
}

pub fn decoded_filename(mime: &str) -> String {
    format!("decoded-image.{}", extension_for_mime(mime))
}

/// Human-readable size of an encoded string.
pub fn size_label(len: usize) -> String {
    #[allow(clippy::cast_precision_loss)]
    let kib = len as f64 / 1024.0;
    if kib < 1.0 { format!("{len} B") } else { format!("{kib:.1} KB") }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Decoded {
    url: String,
    name: String,
    mime: String,
}

/// Decode `input` into a fresh preview, revoking whatever preview came before.
fn decode_into(urls: &mut ObjectUrls, input: &str) -> Result<Decoded, String> {
    urls.revoke_all();
    let image = data_url::decode(input).map_err(|e| e.to_string())?;
    let name = decoded_filename(&image.mime);
    let url = urls.create(&image.bytes, &image.mime).ok_or_else(|| "Could not create a preview.".to_owned())?;
    Ok(Decoded { url, name, mime: image.mime })
}

#[component]
pub fn Base64Tools() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();

    let selected = RwSignal::new(0_usize);
    // `None` keeps the original bytes untouched.
    let target = RwSignal::new(None::<OutputFormat>);
    let quality = RwSignal::new(90_u8);
    let encoded = RwSignal::new(String::new());
    let encode_error = RwSignal::new(None::<String>);

    let pasted = RwSignal::new(String::new());
    let decoded = RwSignal::new(None::<Decoded>);
    let decode_error = RwSignal::new(None::<String>);
    let decoded_urls = RwSignal::new(ObjectUrls::new());

    on_cleanup(move || {
        decoded_urls.try_update(|urls| urls.revoke_all());
    });

    let source_names =
        Memo::new(move |_| dashboard.with(|d| encode_sources(d).into_iter().map(|s| s.name).collect::<Vec<_>>()));

    Effect::new(move |_| {
        let len = source_names.with(Vec::len);
        let current = selected.get_untracked();
        let next = clamp_selection(current, len);
        if next != current {
            selected.set(next);
        }
    });

    let on_encode = move |_| {
        encode_error.set(None);
        let index = clamp_selection(selected.get_untracked(), source_names.with_untracked(Vec::len));
        let Some(source) = dashboard.with_untracked(|d| encode_sources(d).into_iter().nth(index)) else {
            encode_error.set(Some("Process some images first.".to_owned()));
            return;
        };
        let original = data_url::encode(&source.bytes, &source.mime);
        let Some(format) = target.get_untracked() else {
            encoded.set(original);
            return;
        };
        let target = data_url::ReencodeTarget { format, quality: quality.get_untracked(), max_edge: None };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match data_url::reencode(&original, target).await {
                Ok(url) => encoded.set(url),
                Err(e) => encode_error.set(Some(e.to_string())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (original, target);
        }
    };

    let on_decode = move |_| {
        let input = pasted.get_untracked();
        match decoded_urls.try_update(|urls| decode_into(urls, &input)) {
            Some(Ok(image)) => {
                decode_error.set(None);
                decoded.set(Some(image));
            }
            Some(Err(message)) => {
                decoded.set(None);
                decode_error.set(Some(message));
            }
            None => {}
        }
    };

    view! {
        <section class="base64-tools">
            <h3>"Base64 Tools"</h3>

            <div class="base64-tools__encode">
                <label class="options__field">
                    <span>"Image"</span>
                    <select
                        prop:value=move || selected.get().to_string()
                        on:change=move |ev| selected.set(event_target_value(&ev).parse().unwrap_or(0))
                    >
                        {move || {
                            source_names
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(i, name)| view! { <option value=i.to_string()>{name}</option> })
                                .collect_view()
                        }}
                    </select>
                </label>
                <label class="options__field">
                    <span>"Encode as"</span>
                    <select on:change=move |ev| target.set(OutputFormat::from_key(&event_target_value(&ev)))>
                        <option value="">"Original"</option>
                        {OutputFormat::ALL
                            .into_iter()
                            .map(|f| view! { <option value=f.key()>{f.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <Show when=move || target.get().is_some_and(|f| f != OutputFormat::Png)>
                    <label class="options__field">
                        <span>{move || format!("Quality: {}", quality.get())}</span>
                        <input
                            type="range"
                            min="1"
                            max="100"
                            prop:value=move || quality.get().to_string()
                            on:input=move |ev| {
                                if let Ok(q) = event_target_value(&ev).parse::<u8>() {
                                    quality.set(q.clamp(1, 100));
                                }
                            }
                        />
                    </label>
                </Show>
                <button
                    class="btn"
                    disabled=move || source_names.with(Vec::is_empty)
                    on:click=on_encode
                >
                    "Encode"
                </button>
                <Show when=move || encode_error.get().is_some()>
                    <p class="banner banner--error">{move || encode_error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || !encoded.get().is_empty()>
                    <small>{move || size_label(encoded.with(String::len))}</small>
                    <textarea class="base64-tools__output" readonly prop:value=move || encoded.get()></textarea>
                </Show>
            </div>

            <div class="base64-tools__decode">
                <textarea
                    class="base64-tools__input"
                    placeholder="Paste a data URL or base64 string"
                    prop:value=move || pasted.get()
                    on:input=move |ev| pasted.set(event_target_value(&ev))
                ></textarea>
                <button
                    class="btn"
                    disabled=move || pasted.with(|p| p.trim().is_empty())
                    on:click=on_decode
                >
                    "Decode"
                </button>
                <Show when=move || decode_error.get().is_some()>
                    <p class="banner banner--error">{move || decode_error.get().unwrap_or_default()}</p>
                </Show>
                {move || {
                    decoded
                        .get()
                        .map(|d| {
                            view! {
                                <figure class="base64-tools__preview">
                                    <img src=d.url.clone() alt=d.name.clone()/>
                                    <figcaption>
                                        <span>{d.mime.clone()}</span>
                                        " "
                                        <a href=d.url download=d.name.clone()>
                                            {format!("Download {}", d.name)}
                                        </a>
                                    </figcaption>
                                </figure>
                            }
                        })
                }}
            </div>
        </section>
    }
}
