//! The single route: header plus whatever the startup phase and auth state
//! call for.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server always renders the boot screen. Once the browser finishes
//! startup the phase turns `Ready` and the auth state picks between the
//! calculators and the signed-out screens.

use leptos::prelude::*;

use crate::components::user_info::Header;
use crate::pages::auth_screens::AuthScreens;
use crate::pages::calculators::CalculatorsPage;
use crate::pages::error::ErrorScreen;
use crate::state::auth::{AuthState, View};
use crate::state::ui::AppPhase;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let phase = expect_context::<RwSignal<AppPhase>>();
    let unlocked = Memo::new(move |_| auth.with(|s| s.view() == View::Main));

    view! {
        <Header/>
        <main id="app-container" class="app-container">
            {move || match phase.get() {
                AppPhase::Starting => view! {
                    <div class="boot-screen">
                        <div class="loading-spinner"></div>
                    </div>
                }
                .into_any(),
                AppPhase::Failed(message) => view! { <ErrorScreen message/> }.into_any(),
                AppPhase::Ready if unlocked.get() => view! { <CalculatorsPage/> }.into_any(),
                AppPhase::Ready => view! { <AuthScreens/> }.into_any(),
            }}
        </main>
    }
}
