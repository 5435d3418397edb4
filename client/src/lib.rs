//! # client
//!
//! Leptos + WASM front end for FreePro: a subscription gate in front of the
//! ArbiPro and FreePro calculators.
//!
//! This crate contains the auth/subscription state machine, the Firestore
//! user-store adapter, the session cache, and the pages that render the login,
//! expired-subscription, plan-selection and calculator screens. The state
//! machine lives in `state` and `services` and has no browser dependency, so it
//! is exercised by plain unit tests.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod services;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
