//! App startup: wait once for the backend adapter, then restore the session.
//!
//! The wait is a race between the adapter's readiness future and a timeout
//! future supplied by the caller (`gloo-timers` in the browser), so the
//! sequence is testable with any executor.

#[cfg(test)]
#[path = "startup_test.rs"]
mod startup_test;

use std::future::Future;
use std::pin::pin;

use futures::future::{Either, select};

use super::auth::AuthController;
use crate::net::api::{StoreError, UserStore};
use crate::state::auth::View;
use crate::util::storage::KeyValueStore;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StartupError {
    #[error("backend not ready: {0}")]
    BackendNotReady(String),
}

/// Await `ready`, giving up when `timeout` completes first.
///
/// # Errors
///
/// `BackendNotReady` on timeout or when the adapter reports a failure.
pub async fn await_ready<R, T>(ready: R, timeout: T) -> Result<(), StartupError>
where
    R: Future<Output = Result<(), StoreError>>,
    T: Future<Output = ()>,
{
    match select(pin!(ready), pin!(timeout)).await {
        Either::Left((Ok(()), _)) => Ok(()),
        Either::Left((Err(e), _)) => Err(StartupError::BackendNotReady(e.to_string())),
        Either::Right(((), _)) => Err(StartupError::BackendNotReady("timed out".to_owned())),
    }
}

/// Full startup sequence. Returns the view to render first.
///
/// # Errors
///
/// Only readiness can fail; session restore always settles on some view.
pub async fn start<S, K, T>(auth: &AuthController<S, K>, timeout: T) -> Result<View, StartupError>
where
    S: UserStore,
    K: KeyValueStore,
    T: Future<Output = ()>,
{
    await_ready(auth.store().ready(), timeout).await?;
    log::info!("backend ready");
    Ok(auth.auto_login().await)
}
