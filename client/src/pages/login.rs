//! Login screen: e-mail + password form with a link to the plan list.
//!
//! ERROR HANDLING
//! ==============
//! Every failed attempt surfaces as a blocking alert; the form stays filled
//! so the user can correct and resubmit.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::app::{AuthHandle, with_auth};
use crate::services::auth::AuthError;
use crate::state::auth::AuthScreen;

/// Alert text for a failed login.
fn login_error_message(error: &AuthError) -> String {
    format!("Login error: {error}")
}

#[component]
pub fn LoginScreen() -> impl IntoView {
    let controller = use_context::<AuthHandle>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        with_auth(controller, move |ctl| {
            busy.set(true);
            leptos::task::spawn_local(async move {
                match ctl.login(&email_value, &password_value).await {
                    Ok(outcome) => log::info!("login finished: {outcome:?}"),
                    Err(e) => {
                        log::warn!("login rejected: {e}");
                        crate::util::browser::alert(&login_error_message(&e));
                    }
                }
                let _ = busy.try_set(false);
            });
        });
    };

    view! {
        <div class="auth-container">
            <h2 class="auth-title">"Sign in"</h2>
            <form id="loginForm" class="auth-form" on:submit=on_submit>
                <label for="loginEmail">"E-mail"</label>
                <input
                    id="loginEmail"
                    class="form-input"
                    type="email"
                    autocomplete="username"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <label for="loginPassword">"Password"</label>
                <input
                    id="loginPassword"
                    class="form-input"
                    type="password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="btn btn-primary btn-block" type="submit" disabled=move || busy.get()>
                    <Show when=move || busy.get() fallback=|| view! { <span id="loginText">"Sign in"</span> }>
                        <span id="loginSpinner" class="loading-spinner"></span>
                    </Show>
                </button>
            </form>
            <p class="auth-footer">
                "No subscription yet? "
                <button
                    id="showPlansBtn"
                    class="btn btn-link"
                    type="button"
                    on:click=move |_| with_auth(controller, |ctl| ctl.show_screen(AuthScreen::Plans))
                >
                    "See plans"
                </button>
            </p>
        </div>
    }
}
