//! App header with the signed-in user's details and logout.

#[cfg(test)]
#[path = "user_info_test.rs"]
mod user_info_test;

use leptos::prelude::*;

use crate::app::{AuthHandle, with_auth};
use crate::components::theme_toggle::ThemeToggle;
use crate::state::auth::AuthState;
use crate::state::session::Session;
use crate::util::date::format_day_or_na;

fn expires_label(session: &Session) -> String {
    format!("Expires on: {}", format_day_or_na(session.expires_on()))
}

fn status_class(session: &Session) -> &'static str {
    if session.status.as_deref() == Some("active") {
        "status-badge status-badge--active"
    } else {
        "status-badge status-badge--expired"
    }
}

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="app-header">
            <h1 class="app-title">"FreePro"</h1>
            <div class="app-header__actions">
                <UserInfo/>
                <ThemeToggle/>
            </div>
        </header>
    }
}

/// Current user summary. Hidden while signed out.
#[component]
pub fn UserInfo() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let controller = use_context::<AuthHandle>();
    let session = Memo::new(move |_| auth.with(|s| s.session.clone()));

    view! {
        {move || {
            session
                .get()
                .map(|s| {
                    view! {
                        <div id="userInfo" class="user-info">
                            <span id="userEmail" class="user-info__email">{s.email.clone()}</span>
                            <span id="userStatus" class=status_class(&s)>{s.status_label()}</span>
                            <span id="userExpires" class="user-info__expires">{expires_label(&s)}</span>
                            <button
                                id="logoutBtn"
                                class="btn btn-secondary"
                                type="button"
                                on:click=move |_| with_auth(controller, |ctl| ctl.logout())
                            >
                                "Log out"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
