//! Shown when the credentials were right but the subscription lapsed.

use leptos::prelude::*;

use crate::app::{AuthHandle, with_auth};
use crate::config::AppConfig;
use crate::pages::plans::open_checkout;
use crate::state::auth::AuthState;
use crate::state::plans::Plan;

#[component]
pub fn ExpiredScreen() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let controller = use_context::<AuthHandle>();

    let on_renew = move |_| {
        let email = auth.with_untracked(|s| s.email().map(str::to_owned));
        open_checkout(&config, Plan::RENEWAL, email.as_deref());
    };

    view! {
        <div class="auth-container">
            <h2 class="auth-title">"Subscription expired"</h2>
            <p class="auth-text">
                "Your access has ended. Renew to keep using the calculators."
            </p>
            <button id="renewSubscriptionBtn" class="btn btn-primary btn-block" on:click=on_renew>
                {format!("Renew ({})", Plan::RENEWAL.name())}
            </button>
            <button
                class="btn btn-link"
                type="button"
                on:click=move |_| with_auth(controller, |ctl| ctl.logout())
            >
                "Use another account"
            </button>
        </div>
    }
}
