//! Theme preference.
//!
//! Reads the user's preference from `localStorage` and applies a
//! `data-theme` attribute to the `<html>` element. Toggle writes back to
//! `localStorage` and updates that attribute.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! no-op so server rendering stays deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use super::storage::{BrowserStorage, KeyValueStore};

const STORAGE_KEY: &str = "freepro_theme";

fn theme_name(enabled: bool) -> &'static str {
    if enabled { "dark" } else { "light" }
}

/// Interpret a stored preference. Accepts the theme name or a boolean.
fn parse_stored(raw: &str) -> Option<bool> {
    match raw {
        "dark" | "true" => Some(true),
        "light" | "false" => Some(false),
        _ => None,
    }
}

/// Read the dark mode preference.
///
/// Returns the stored choice when there is one, otherwise whether the system
/// prefers a dark color scheme.
pub fn read_preference() -> bool {
    if let Some(stored) = BrowserStorage.get(STORAGE_KEY).as_deref().and_then(parse_stored) {
        return stored;
    }
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
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.set_attribute("data-theme", theme_name(enabled));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    BrowserStorage.set(STORAGE_KEY, theme_name(next));
    next
}
