//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `dashboard`, `ui`) and provided as
//! `RwSignal`s from the app root, so components depend on small focused
//! models. `options` is the form-bound record nested inside `dashboard`.

pub mod auth;
pub mod dashboard;
pub mod options;
pub mod ui;
