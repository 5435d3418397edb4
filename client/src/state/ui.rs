//! Local UI chrome state (startup phase, theme, calculator tabs).
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of the auth state so the auth state
//! machine stays free of rendering details.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Where the app is in its startup sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AppPhase {
    /// Waiting for the backend and the stored-session restore.
    #[default]
    Starting,
    Ready,
    /// Unrecoverable; rendered as a full-screen error with a reload action.
    Failed(String),
}

/// UI state for theme and calculator tabs.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    /// Index into the configured calculators.
    pub active_tab: usize,
}

impl UiState {
    /// Move to tab `index` when it exists; returns whether it moved.
    pub fn select_tab(&mut self, index: usize, tab_count: usize) -> bool {
        if index >= tab_count || index == self.active_tab {
            return false;
        }
        self.active_tab = index;
        true
    }

    /// Arrow-key navigation across tabs, wrapping at both ends.
    pub fn step_tab(&mut self, forward: bool, tab_count: usize) {
        if tab_count == 0 {
            return;
        }
        let current = self.active_tab.min(tab_count - 1);
        self.active_tab = if forward { (current + 1) % tab_count } else { (current + tab_count - 1) % tab_count };
    }
}
