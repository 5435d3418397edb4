//! Thin wrappers over `window` side effects: alerts, new tabs, reloads.
//!
//! SSR paths no-op; these only mean something in the browser.

/// Blocking `window.alert`.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

/// Open `url` in a new browsing context.
pub fn open_in_new_tab(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        let opened = web_sys::window().map(|w| w.open_with_url_and_target(url, "_blank"));
        if !matches!(opened, Some(Ok(Some(_)))) {
            log::warn!("could not open {url}; popup blocked?");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}

/// Reload the current page.
pub fn reload() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
}
