//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of domain state (`auth`, `dashboard`) so
//! the header can evolve independently of request data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state shared by the header and pages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
}

impl UiState {
    pub fn theme_name(&self) -> &'static str {
        if self.dark_mode { "dark" } else { "light" }
    }

    /// Glyph for the toggle button: the theme it switches *to*.
    pub fn toggle_glyph(&self) -> &'static str {
        if self.dark_mode { "☀" } else { "☾" }
    }
}
