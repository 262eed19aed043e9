//! Download naming and programmatic browser downloads.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

use crate::state::options::OutputFormat;

/// Extract the `filename` parameter from a `Content-Disposition` header.
///
/// Accepts quoted and bare values, any casing of the parameter name, and
/// whitespace around `=`. Returns `None` when no non-blank name is present.
pub fn filename_from_content_disposition(header: &str) -> Option<String> {
    let lower = header.to_ascii_lowercase();
    let mut search_from = 0;

    while let Some(found) = lower[search_from..].find("filename") {
        let start = search_from + found + "filename".len();
        search_from = start;

        let rest = header[start..].trim_start();
        // Skip `filename*=` (RFC 5987) and unrelated tokens.
        let Some(value) = rest.strip_prefix('=') else {
            continue;
        };
        let value = value.trim_start();
        let value = value.strip_prefix('"').unwrap_or(value);
        let end = value.find(['"', ';']).unwrap_or(value.len());
        let name = value[..end].trim();
        if !name.is_empty() {
            return Some(name.to_owned());
        }
    }

    None
}

/// Name used when the server does not provide one.
pub fn fallback_filename(format: OutputFormat) -> String {
    format!("processed-image.{}", format.extension())
}

/// Resolve the name for a single-image response.
pub fn single_result_filename(content_disposition: Option<&str>, format: OutputFormat) -> String {
    content_disposition
        .and_then(filename_from_content_disposition)
        .unwrap_or_else(|| fallback_filename(format))
}

/// Offer `bytes` to the user as a file download.
///
/// A temporary object URL is minted, clicked through a detached anchor, and
/// revoked on the next tick.
pub fn trigger_download(bytes: &[u8], mime: &str, filename: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(url) = crate::util::object_url::mint(bytes, mime) else {
            leptos::logging::warn!("download: could not create object URL for {filename}");
            return;
        };
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            crate::util::object_url::release(&url);
            return;
        };
        let anchor = doc
            .create_element("a")
            .ok()
            .and_then(|el| el.dyn_into::<web_sys::HtmlAnchorElement>().ok());
        if let Some(anchor) = anchor {
            anchor.set_href(&url);
            anchor.set_download(if filename.is_empty() { "processed-image" } else { filename });
            if let Some(body) = doc.body() {
                let _ = body.append_child(&anchor);
                anchor.click();
                anchor.remove();
            }
        }
        gloo_timers::callback::Timeout::new(0, move || crate::util::object_url::release(&url)).forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (bytes, mime, filename);
    }
}
