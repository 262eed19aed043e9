//! Networking modules for the processing API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs credentialed REST calls against the configured base URL,
//! and `types` defines the JSON shapes exchanged with the backend.

pub mod api;
pub mod types;
