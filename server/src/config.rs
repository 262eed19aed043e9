//! Host configuration parsed from the environment.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leptos options (site root, pkg dir, default address) come from the
//! workspace `[[workspace.metadata.leptos]]` section. This module layers the
//! deployment overrides on top: `LEPTOS_SITE_ADDR` replaces the address
//! outright, and `PORT` binds every interface on the given port.
//!
//! ERROR HANDLING
//! ==============
//! Malformed overrides are fatal at startup; nothing here falls back
//! silently to a default once a value is present.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,imgproc_server=debug,tower_http=debug";

/// Startup failures of the host process.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// The Leptos metadata could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    /// `PORT` is set but is not a valid port number.
    #[error("invalid PORT value {value:?}")]
    InvalidPort { value: String },

    /// `LEPTOS_SITE_ADDR` is set but is not a socket address.
    #[error("invalid LEPTOS_SITE_ADDR value {value:?}")]
    InvalidSiteAddr { value: String },

    /// The listener could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("server failed: {0}")]
    Serve(#[from] std::io::Error),
}

/// Decide the bind address from the configured default and the overrides.
///
/// # Errors
///
/// Returns [`HostError::InvalidSiteAddr`] or [`HostError::InvalidPort`] when
/// an override is present but malformed.
pub fn resolve_site_addr(
    configured: SocketAddr,
    site_addr: Option<&str>,
    port: Option<&str>,
) -> Result<SocketAddr, HostError> {
    if let Some(raw) = site_addr.map(str::trim).filter(|s| !s.is_empty()) {
        return raw
            .parse()
            .map_err(|_| HostError::InvalidSiteAddr { value: raw.to_owned() });
    }
    if let Some(raw) = port.map(str::trim).filter(|s| !s.is_empty()) {
        let port: u16 = raw.parse().map_err(|_| HostError::InvalidPort { value: raw.to_owned() })?;
        return Ok(SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port));
    }
    Ok(configured)
}

/// The tracing filter directive: `RUST_LOG` when set, otherwise the default.
pub fn log_filter(rust_log: Option<&str>) -> String {
    rust_log
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_LOG_FILTER)
        .to_owned()
}

/// Bind address from the process environment.
///
/// # Errors
///
/// See [`resolve_site_addr`].
pub fn site_addr_from_env(configured: SocketAddr) -> Result<SocketAddr, HostError> {
    let site_addr = std::env::var("LEPTOS_SITE_ADDR").ok();
    let port = std::env::var("PORT").ok();
    resolve_site_addr(configured, site_addr.as_deref(), port.as_deref())
}
