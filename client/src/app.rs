//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders `shell` with the boot screen. In the browser, `App`
//! builds the auth controller, mirrors its state into an `RwSignal` through a
//! hub subscription, and runs the startup sequence. Pages read the signals and
//! call the controller through [`AuthHandle`].

use std::rc::Rc;

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::{AppConfig, CONFIG_META_NAME};
use crate::net::api::FirestoreStore;
use crate::pages::home::HomePage;
use crate::services::auth::AuthController;
use crate::state::auth::AuthState;
use crate::state::ui::{AppPhase, UiState};
use crate::util::storage::BrowserStorage;

/// The controller as wired in the browser.
pub type AppAuth = AuthController<FirestoreStore, BrowserStorage>;

/// Context handle to the controller. Only provided in the browser.
pub type AuthHandle = StoredValue<Rc<AppAuth>, LocalStorage>;

/// Run `f` against the controller when one is mounted.
pub fn with_auth(handle: Option<AuthHandle>, f: impl FnOnce(Rc<AppAuth>)) {
    if let Some(controller) = handle.and_then(|h| h.try_get_value()) {
        f(controller);
    }
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions, config: AppConfig) -> impl IntoView {
    let config_json = config.to_meta_content();
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=CONFIG_META_NAME content=config_json/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = use_context::<AppConfig>().unwrap_or_else(AppConfig::from_document);
    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());
    let phase = RwSignal::new(AppPhase::default());

    provide_context(config.clone());
    provide_context(auth);
    provide_context(ui);
    provide_context(phase);

    #[cfg(feature = "hydrate")]
    start_in_browser(&config, auth, ui, phase);

    view! {
        <Stylesheet id="leptos" href="/pkg/freepro.css"/>
        <Title text="FreePro"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}

#[cfg(feature = "hydrate")]
fn start_in_browser(config: &AppConfig, auth: RwSignal<AuthState>, ui: RwSignal<UiState>, phase: RwSignal<AppPhase>) {
    use crate::services::startup;
    use crate::util::dark_mode;
    use crate::util::storage::SessionCache;

    let controller = Rc::new(AuthController::new(
        FirestoreStore::new(config.firestore.clone()),
        SessionCache::new(BrowserStorage, config.storage_key.clone()),
    ));
    controller.subscribe(move |state| match auth.try_set(state.clone()) {
        None => Ok(()),
        Some(_) => Err("auth signal disposed".to_owned()),
    });
    provide_context::<AuthHandle>(StoredValue::new_local(controller.clone()));

    let timeout_ms = config.ready_timeout_ms;
    leptos::task::spawn_local(async move {
        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);

        let timeout = gloo_timers::future::TimeoutFuture::new(timeout_ms);
        match startup::start(&controller, timeout).await {
            Ok(view) => {
                log::info!("startup complete: {view:?}");
                phase.set(AppPhase::Ready);
            }
            Err(e) => {
                log::error!("startup failed: {e}");
                phase.set(AppPhase::Failed("Failed to start the application.".to_owned()));
            }
        }
    });
}
