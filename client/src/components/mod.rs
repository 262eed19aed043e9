//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the site chrome and dashboard panels while reading and
//! writing shared state from Leptos context providers.

pub mod base64_tools;
pub mod batch_preview;
pub mod header;
pub mod image_uploader;
pub mod protected_route;
pub mod resize_options;
