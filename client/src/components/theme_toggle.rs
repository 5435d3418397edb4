//! Light/dark theme switch.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::dark_mode;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let on_click = move |_| {
        let next = dark_mode::toggle(ui.with_untracked(|u| u.dark_mode));
        ui.update(|u| u.dark_mode = next);
    };

    view! {
        <button
            id="themeToggle"
            class="theme-toggle"
            type="button"
            title="Toggle theme"
            aria-label="Toggle theme"
            on:click=on_click
        >
            {move || if ui.with(|u| u.dark_mode) { "☀" } else { "☾" }}
        </button>
    }
}
