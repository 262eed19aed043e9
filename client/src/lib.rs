//! # imgproc-client
//!
//! Leptos + WASM frontend for the image processor: account screens plus a
//! dashboard that uploads images to the processing API, then previews and
//! bundles the results.
//!
//! This crate contains pages, components, application state, the REST client,
//! and browser helpers (object URLs, archives, data URLs, theme storage).
//! Browser-only code is gated behind the `hydrate` feature; everything else
//! compiles natively so it can be unit tested without a browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
