//! The three signed-out screens and their visibility switch.
//!
//! DESIGN
//! ======
//! All three screens stay mounted and only the current one is visible, so
//! typed credentials survive a detour through the plan list.

use leptos::prelude::*;

use crate::pages::expired::ExpiredScreen;
use crate::pages::login::LoginScreen;
use crate::pages::plans::PlansScreen;
use crate::state::auth::{AuthScreen, AuthState};

#[component]
pub fn AuthScreens() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let screen = Memo::new(move |_| auth.with(|s| s.screen));
    let hidden_unless = move |wanted: AuthScreen| move || screen.get() != wanted;

    view! {
        <div id=AuthScreen::Login.element_id() class="container" class:hidden=hidden_unless(AuthScreen::Login)>
            <LoginScreen/>
        </div>
        <div id=AuthScreen::Expired.element_id() class="container" class:hidden=hidden_unless(AuthScreen::Expired)>
            <ExpiredScreen/>
        </div>
        <div id=AuthScreen::Plans.element_id() class="container" class:hidden=hidden_unless(AuthScreen::Plans)>
            <PlansScreen/>
        </div>
    }
}
