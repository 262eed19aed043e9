//! REST client for the auth and image-processing endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, always sending
//! credentials so the backend's session cookie travels cross-origin.
//! Server-side (SSR) and native tests: every call returns
//! [`ApiError::Unavailable`] since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures are request-local. Non-2xx responses are turned into
//! [`ApiError::Status`] carrying the server's `message` when one was sent, so
//! pages can show it verbatim or fall back to a generic string.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use super::types::AuthResponse;
use super::types::{Credentials, ProcessedResponse, User};
use crate::config::ConfigError;
use crate::state::dashboard::SelectedFile;
use crate::state::options::ProcessingOptions;

/// Multipart field carrying each uploaded image.
pub const IMAGES_FIELD: &str = "images";
/// Multipart field carrying the JSON-encoded options record.
pub const OPTIONS_FIELD: &str = "options";

/// A failed API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Network(String),
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Message to show the user: the server's message when present, the
    /// configuration problem for a misconfigured build, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message: Some(message), .. } if !message.trim().is_empty() => message.clone(),
            Self::Config(e) => e.to_string(),
            _ => fallback.to_owned(),
        }
    }
}

/// Join `path` onto the configured `/api` root.
#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> Result<String, ApiError> {
    let root = crate::config::api_root()?;
    Ok(format!("{root}{path}"))
}

/// Extract `message` from a JSON error body.
#[cfg(any(test, feature = "hydrate"))]
fn json_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<super::types::ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
}

/// Extract a message from a binary error body: JSON `message` first, then the
/// raw text when it is not JSON.
#[cfg(any(test, feature = "hydrate"))]
fn message_or_text(body: &[u8]) -> Option<String> {
    if serde_json::from_slice::<serde_json::Value>(body).is_ok() {
        return json_message(body);
    }
    let text = String::from_utf8_lossy(body).trim().to_owned();
    if text.is_empty() { None } else { Some(text) }
}

/// Serialize the options record for the `options` multipart field.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if serialization fails.
pub fn encode_options(options: &ProcessingOptions) -> Result<String, ApiError> {
    serde_json::to_string(options).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
fn network_error(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

#[cfg(feature = "hydrate")]
fn js_error(value: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Network(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

#[cfg(feature = "hydrate")]
async fn status_error(resp: gloo_net::http::Response, parse: fn(&[u8]) -> Option<String>) -> ApiError {
    let status = resp.status();
    let body = resp.binary().await.unwrap_or_default();
    ApiError::Status { status, message: parse(&body) }
}

#[cfg(feature = "hydrate")]
async fn read_user(resp: gloo_net::http::Response) -> Result<User, ApiError> {
    if !resp.ok() {
        return Err(status_error(resp, json_message).await);
    }
    let body: AuthResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(body.user)
}

#[cfg(feature = "hydrate")]
async fn post_credentials(path: &str, credentials: &Credentials) -> Result<User, ApiError> {
    let url = endpoint(path)?;
    let resp = gloo_net::http::Request::post(&url)
        .credentials(web_sys::RequestCredentials::Include)
        .json(credentials)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    read_user(resp).await
}

/// Create an account via `POST /api/auth/signup`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the server rejects it.
pub async fn signup(credentials: &Credentials) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_credentials("/auth/signup", credentials).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(ApiError::Unavailable)
    }
}

/// Start a session via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the server rejects it.
pub async fn login(credentials: &Credentials) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_credentials("/auth/login", credentials).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(ApiError::Unavailable)
    }
}

/// End the session via `POST /api/auth/logout`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the server rejects it.
pub async fn logout() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint("/auth/logout")?;
        let resp = gloo_net::http::Request::post(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(network_error)?;
        if !resp.ok() {
            return Err(status_error(resp, json_message).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch the signed-in user from `GET /api/auth/me`.
///
/// # Errors
///
/// Returns an [`ApiError`] when there is no valid session.
pub async fn fetch_current_user() -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint("/auth/me")?;
        let resp = gloo_net::http::Request::get(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(network_error)?;
        read_user(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Upload `files` with `options` to `POST /api/images/process`.
///
/// Each file becomes one `images` part; the options record is sent as a JSON
/// string in the `options` part. The browser supplies the multipart boundary.
///
/// # Errors
///
/// Returns an [`ApiError`] if the form cannot be built, the request fails, or
/// the server responds with a non-OK status. Error bodies are read as bytes
/// and parsed as JSON `message` or plain text.
pub async fn process_images(files: &[SelectedFile], options: &ProcessingOptions) -> Result<ProcessedResponse, ApiError> {
    let options_json = encode_options(options)?;
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint("/images/process")?;
        let form = web_sys::FormData::new().map_err(js_error)?;
        for file in files {
            let blob = crate::util::object_url::bytes_to_blob(&file.bytes, &file.mime).map_err(js_error)?;
            form.append_with_blob_and_filename(IMAGES_FIELD, &blob, &file.name)
                .map_err(js_error)?;
        }
        form.append_with_str(OPTIONS_FIELD, &options_json).map_err(js_error)?;

        let resp = gloo_net::http::Request::post(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .body(form)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        if !resp.ok() {
            return Err(status_error(resp, message_or_text).await);
        }

        let headers = resp.headers();
        let content_disposition = headers.get("content-disposition");
        let content_type = headers.get("content-type");
        let bytes = resp.binary().await.map_err(network_error)?;
        Ok(ProcessedResponse { bytes, content_disposition, content_type })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (files, options_json);
        Err(ApiError::Unavailable)
    }
}

/// Message for a failed processing run: server message, then transport
/// detail, then `"Processing failed"`.
pub fn processing_error_message(err: &ApiError) -> String {
    const FALLBACK: &str = "Processing failed";
    match err {
        ApiError::Status { .. } => err.user_message(FALLBACK),
        ApiError::Network(detail) if !detail.trim().is_empty() => detail.clone(),
        ApiError::Config(_) | ApiError::Decode(_) => err.to_string(),
        _ => FALLBACK.to_owned(),
    }
}
