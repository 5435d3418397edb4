//! Plan list with checkout links.
//!
//! DESIGN
//! ======
//! Checkout happens on an external page opened in a new tab. The buyer's
//! e-mail rides along as a query parameter when someone is signed in, so the
//! purchase lands on the right account.

#[cfg(test)]
#[path = "plans_test.rs"]
mod plans_test;

use leptos::prelude::*;

use crate::app::{AuthHandle, with_auth};
use crate::components::plan_card::PlanCard;
use crate::config::AppConfig;
use crate::state::auth::{AuthScreen, AuthState};
use crate::state::plans::Plan;
use crate::util::browser;

const CHECKOUT_UNAVAILABLE: &str = "Checkout is not available for this plan right now.";

/// Resolve where a click on `plan` should go.
fn checkout_target(config: &AppConfig, plan: Plan, email: Option<&str>) -> Result<String, &'static str> {
    config.checkout_url(plan, email).ok_or(CHECKOUT_UNAVAILABLE)
}

/// Open the checkout page for `plan`, or tell the user it is unavailable.
pub(crate) fn open_checkout(config: &AppConfig, plan: Plan, email: Option<&str>) {
    match checkout_target(config, plan, email) {
        Ok(url) => browser::open_in_new_tab(&url),
        Err(message) => {
            log::warn!("no checkout url configured for {}", plan.key());
            browser::alert(message);
        }
    }
}

#[component]
pub fn PlansScreen() -> impl IntoView {
    let config = StoredValue::new(expect_context::<AppConfig>());
    let auth = expect_context::<RwSignal<AuthState>>();
    let controller = use_context::<AuthHandle>();

    let on_select = Callback::new(move |plan: Plan| {
        let email = auth.with_untracked(|s| s.email().map(str::to_owned));
        config.with_value(|config| open_checkout(config, plan, email.as_deref()));
    });

    view! {
        <div class="plans-container">
            <h2 class="auth-title">"Choose your plan"</h2>
            <div class="plans-grid">
                {Plan::ALL.into_iter().map(|plan| view! { <PlanCard plan on_select/> }).collect_view()}
            </div>
            <button
                id="backToLoginBtn"
                class="btn btn-secondary"
                type="button"
                on:click=move |_| with_auth(controller, |ctl| ctl.show_screen(AuthScreen::Login))
            >
                "Back to login"
            </button>
        </div>
    }
}
