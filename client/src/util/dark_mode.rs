//! Dark mode initialization and toggle.
//!
//! Reads the user's preference from `localStorage` and applies a
//! `data-theme` attribute to the `<html>` element. Toggle writes back to
//! `localStorage` and updates that attribute.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use super::storage::{LocalStorage, PreferenceStore};

/// `localStorage` key holding `"true"` / `"false"`.
pub const STORAGE_KEY: &str = "imgproc_theme_dark";

/// Read the stored flag, if one was ever written.
pub fn stored_preference(store: &impl PreferenceStore) -> Option<bool> {
    store.get(STORAGE_KEY).map(|val| val == "true")
}

/// Read the dark mode preference.
///
/// Returns the stored flag, or the system `prefers-color-scheme` when no
/// preference is stored.
pub fn read_preference() -> bool {
    stored_preference(&LocalStorage).unwrap_or_else(system_prefers_dark)
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", if enabled { "dark" } else { "light" });
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode, persisting the new flag to `store`.
pub fn toggle_in(store: &impl PreferenceStore, current: bool) -> bool {
    let next = !current;
    apply(next);
    store.set(STORAGE_KEY, if next { "true" } else { "false" });
    next
}

/// Toggle dark mode and persist the new preference to localStorage.
pub fn toggle(current: bool) -> bool {
    toggle_in(&LocalStorage, current)
}
