//! Full-screen error shown when startup or calculator setup fails.

use leptos::prelude::*;

use crate::util::browser;

#[component]
pub fn ErrorScreen(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="container error-screen">
            <div class="auth-container">
                <h2 class="error-screen__title">"Something went wrong"</h2>
                <p class="error-screen__message">{message}</p>
                <button class="btn btn-primary" on:click=move |_| browser::reload()>
                    "Reload page"
                </button>
            </div>
        </div>
    }
}
