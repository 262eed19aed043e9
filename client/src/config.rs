//! API base-URL resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! The processing API lives on a separate origin. Its base URL is baked into
//! the bundle at compile time from `IMGPROC_API_BASE_URL`; every REST call in
//! `net::api` resolves its endpoint through [`api_root`].
//!
//! TRADE-OFFS
//! ==========
//! Release builds refuse a plain-http base instead of silently sending session
//! cookies in the clear. The error is surfaced per request rather than at
//! startup so public pages still render.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when `IMGPROC_API_BASE_URL` is unset or blank.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

const API_BASE_ENV: Option<&str> = option_env!("IMGPROC_API_BASE_URL");

/// Invalid compile-time API configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("API base URL must use https in production builds (got `{0}`)")]
    InsecureBaseUrl(String),
}

/// Trim whitespace and a single trailing slash.
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed.strip_suffix('/').unwrap_or(trimmed).to_owned()
}

/// Resolve the `/api` root from an optional configured base.
///
/// # Errors
///
/// Returns [`ConfigError::InsecureBaseUrl`] when `production` is set and the
/// base does not use `https://`.
pub fn resolve_api_root(raw: Option<&str>, production: bool) -> Result<String, ConfigError> {
    let base = raw
        .map(normalize_base_url)
        .filter(|base| !base.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_owned());

    if production && !base.to_ascii_lowercase().starts_with("https://") {
        return Err(ConfigError::InsecureBaseUrl(base));
    }

    Ok(format!("{base}/api"))
}

/// The `/api` root for this build.
///
/// # Errors
///
/// See [`resolve_api_root`]; release builds count as production.
pub fn api_root() -> Result<String, ConfigError> {
    resolve_api_root(API_BASE_ENV, !cfg!(debug_assertions))
}
