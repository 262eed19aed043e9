//! Base64 data-URL helpers and canvas re-encoding.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the uploader (thumbnail previews) and the Base64 tools panel
//! (copying a result as a data URL, or turning a pasted string back into an
//! image). Canvas re-encoding runs entirely in the browser and never talks to
//! the processing API.

#[cfg(test)]
#[path = "data_url_test.rs"]
mod data_url_test;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::state::options::OutputFormat;

/// Decoded data-URL payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataUrl {
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Malformed Base64 input or a failed canvas conversion.
#[derive(Debug, thiserror::Error)]
pub enum DataUrlError {
    #[error("nothing to decode")]
    Empty,
    #[error("data URL is not base64-encoded")]
    NotBase64,
    #[error("invalid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
    #[error("canvas conversion failed: {0}")]
    Canvas(String),
}

/// Options for [`reencode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReencodeTarget {
    pub format: OutputFormat,
    /// 1 to 100; ignored by PNG.
    pub quality: u8,
    /// Longest output edge in pixels; `None` keeps the natural size.
    pub max_edge: Option<u32>,
}

/// Encode `bytes` as `data:<mime>;base64,<payload>`.
pub fn encode(bytes: &[u8], mime: &str) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Decode a data URL or a bare base64 string.
///
/// Whitespace inside the payload is ignored. For bare base64 the MIME type is
/// sniffed from the decoded bytes.
///
/// # Errors
///
/// Returns a [`DataUrlError`] for blank input, non-base64 data URLs, or an
/// invalid base64 payload.
pub fn decode(input: &str) -> Result<DataUrl, DataUrlError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(DataUrlError::Empty);
    }

    let (declared_mime, payload) = match input.strip_prefix("data:") {
        Some(rest) => {
            let (header, payload) = rest.split_once(',').ok_or(DataUrlError::NotBase64)?;
            let mut parts = header.split(';');
            let mime = parts.next().unwrap_or_default().trim().to_owned();
            if !parts.any(|p| p.trim().eq_ignore_ascii_case("base64")) {
                return Err(DataUrlError::NotBase64);
            }
            (Some(mime).filter(|m| !m.is_empty()), payload)
        }
        None => (None, input),
    };

    let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err(DataUrlError::Empty);
    }
    let bytes = STANDARD.decode(compact.as_bytes())?;
    let mime = declared_mime.unwrap_or_else(|| sniff_mime(&bytes).to_owned());
    Ok(DataUrl { mime, bytes })
}

/// Identify common image formats by their magic bytes.
pub fn sniff_mime(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
        "image/png"
    } else if bytes.starts_with(&[0xff, 0xd8, 0xff]) {
        "image/jpeg"
    } else if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        "image/webp"
    } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        "image/gif"
    } else {
        "application/octet-stream"
    }
}

/// Fit `(width, height)` inside `max_edge`, preserving aspect ratio and never
/// upscaling.
pub fn scaled_size(width: u32, height: u32, max_edge: Option<u32>) -> (u32, u32) {
    let Some(max_edge) = max_edge.filter(|m| *m > 0) else {
        return (width, height);
    };
    let longest = width.max(height);
    if longest <= max_edge || longest == 0 {
        return (width, height);
    }
    let scale = f64::from(max_edge) / f64::from(longest);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let fit = |v: u32| ((f64::from(v) * scale).round() as u32).max(1);
    (fit(width), fit(height))
}

/// Draw `data_url` onto an offscreen canvas and export it as `target`.
///
/// JPEG output is composited over white since it has no alpha channel.
///
/// # Errors
///
/// Returns [`DataUrlError::Canvas`] if the image fails to load or the canvas
/// cannot export, and always outside the browser.
pub async fn reencode(data_url: &str, target: ReencodeTarget) -> Result<String, DataUrlError> {
    #[cfg(feature = "hydrate")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let canvas_err = |e: wasm_bindgen::JsValue| DataUrlError::Canvas(format!("{e:?}"));

        let doc = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| DataUrlError::Canvas("no document".to_owned()))?;
        let img = web_sys::HtmlImageElement::new().map_err(canvas_err)?;

        let (tx, rx) = futures::channel::oneshot::channel::<bool>();
        let tx = Rc::new(RefCell::new(Some(tx)));
        let on_load = {
            let tx = Rc::clone(&tx);
            Closure::<dyn FnMut()>::new(move || {
                if let Some(tx) = tx.borrow_mut().take() {
                    let _ = tx.send(true);
                }
            })
        };
        let on_error = {
            let tx = Rc::clone(&tx);
            Closure::<dyn FnMut()>::new(move || {
                if let Some(tx) = tx.borrow_mut().take() {
                    let _ = tx.send(false);
                }
            })
        };
        img.set_onload(Some(on_load.as_ref().unchecked_ref()));
        img.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        img.set_src(data_url);

        let loaded = rx.await.unwrap_or(false);
        img.set_onload(None);
        img.set_onerror(None);
        drop((on_load, on_error));
        if !loaded {
            return Err(DataUrlError::Canvas("image failed to load".to_owned()));
        }

        let (width, height) = scaled_size(img.natural_width(), img.natural_height(), target.max_edge);
        let canvas = doc
            .create_element("canvas")
            .map_err(canvas_err)?
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .map_err(|_| DataUrlError::Canvas("not a canvas".to_owned()))?;
        canvas.set_width(width);
        canvas.set_height(height);
        let ctx = canvas
            .get_context("2d")
            .map_err(canvas_err)?
            .ok_or_else(|| DataUrlError::Canvas("2d context unavailable".to_owned()))?
            .dyn_into::<web_sys::CanvasRenderingContext2d>()
            .map_err(|_| DataUrlError::Canvas("2d context unavailable".to_owned()))?;

        if !target.format.supports_transparency() {
            ctx.set_fill_style_str("#ffffff");
            ctx.fill_rect(0.0, 0.0, f64::from(width), f64::from(height));
        }
        ctx.draw_image_with_html_image_element_and_dw_and_dh(&img, 0.0, 0.0, f64::from(width), f64::from(height))
            .map_err(canvas_err)?;

        let quality = wasm_bindgen::JsValue::from_f64(f64::from(target.quality.clamp(1, 100)) / 100.0);
        canvas
            .to_data_url_with_type_and_encoder_options(target.format.mime(), &quality)
            .map_err(canvas_err)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (data_url, target);
        Err(DataUrlError::Canvas("not available on server".to_owned()))
    }
}
