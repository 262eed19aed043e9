//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod about;
pub(crate) mod auth_form;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod signup;
