//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, object
//! URLs, downloads, canvas) from page and component logic to improve reuse
//! and testability.

pub mod archive;
pub mod auth;
pub mod dark_mode;
pub mod data_url;
pub mod download;
pub mod object_url;
pub mod storage;
