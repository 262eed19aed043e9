//! Object-URL minting and release for in-memory image bytes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Previews and download links point at `blob:` URLs. Each one pins its
//! bytes in browser memory until revoked, so the dashboard routes every URL
//! it creates through an [`ObjectUrls`] registry and revokes the whole set
//! when results are cleared, replaced, or the page unmounts.
//!
//! Outside the browser, minting returns unique `blob:local/...` placeholders
//! and release is a no-op, which keeps the registry logic testable natively.

#[cfg(test)]
#[path = "object_url_test.rs"]
mod object_url_test;

/// Tracks every live object URL minted for one owner.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ObjectUrls {
    live: Vec<String>,
}

impl ObjectUrls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a URL for `bytes` and start tracking it.
    pub fn create(&mut self, bytes: &[u8], mime: &str) -> Option<String> {
        let url = mint(bytes, mime)?;
        self.live.push(url.clone());
        Some(url)
    }

    /// Revoke one tracked URL. Returns `false` if it was not tracked.
    pub fn revoke(&mut self, url: &str) -> bool {
        let Some(pos) = self.live.iter().position(|u| u == url) else {
            return false;
        };
        let url = self.live.swap_remove(pos);
        release(&url);
        true
    }

    /// Revoke every tracked URL, returning how many were released.
    pub fn revoke_all(&mut self) -> usize {
        let urls = std::mem::take(&mut self.live);
        for url in &urls {
            release(url);
        }
        urls.len()
    }

    pub fn live(&self) -> &[String] {
        &self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

/// Mint an untracked object URL for `bytes`.
///
/// Callers that do not register the URL with [`ObjectUrls`] must
/// [`release`] it themselves.
pub fn mint(bytes: &[u8], mime: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let blob = bytes_to_blob(bytes, mime).ok()?;
        web_sys::Url::create_object_url_with_blob(&blob).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (bytes, mime);
        Some(format!("blob:local/{}", uuid::Uuid::new_v4()))
    }
}

/// Revoke an object URL.
pub fn release(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        let _ = web_sys::Url::revoke_object_url(url);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}

/// Copy `bytes` into a JS `Blob` of type `mime`.
///
/// # Errors
///
/// Returns the JS exception if the blob cannot be constructed.
#[cfg(feature = "hydrate")]
pub fn bytes_to_blob(bytes: &[u8], mime: &str) -> Result<web_sys::Blob, wasm_bindgen::JsValue> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array);
    let props = web_sys::BlobPropertyBag::new();
    props.set_type(mime);
    web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &props)
}
