//! User-store access: the remote half of the credential store.
//!
//! Client-side (hydrate): real HTTP calls to the Firestore REST API via
//! `gloo-net`.
//! Server-side (SSR): stubs returning an error since lookups are only
//! meaningful in the browser.
//!
//! Readiness is one round trip: a one-document listing of the users
//! collection. Any answer from Firestore counts as ready; only transport
//! failures and 5xx do not. Outside the browser readiness is the config
//! check alone.
//!
//! ERROR HANDLING
//! ==============
//! A missing document is `Ok(None)`, not an error; callers branch on it. Only
//! transport, status and decode failures surface as [`StoreError`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::UserRecord;
use crate::config::FirestoreConfig;

/// Errors produced by user-store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The adapter lacks the settings needed to reach the backend.
    #[error("user store not configured")]
    NotConfigured,

    /// The request could not be sent or completed.
    #[error("request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success status other than 404.
    #[error("unexpected status: {0}")]
    Status(u16),

    /// The response body was not a document.
    #[error("decode failed: {0}")]
    Decode(String),

    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

/// Keyed document lookup by e-mail.
///
/// The UI is single-threaded, so futures are not required to be `Send`.
#[async_trait(?Send)]
pub trait UserStore {
    /// Resolves once the backend can serve lookups.
    async fn ready(&self) -> Result<(), StoreError>;

    /// Fetch the user document for `email`. `Ok(None)` when it does not exist.
    async fn fetch_user(&self, email: &str) -> Result<Option<UserRecord>, StoreError>;
}

/// Firestore REST adapter reading `{collection}/{email}`.
#[derive(Clone, Debug)]
pub struct FirestoreStore {
    config: FirestoreConfig,
}

impl FirestoreStore {
    pub fn new(config: FirestoreConfig) -> Self {
        Self { config }
    }

    fn ensure_configured(&self) -> Result<(), StoreError> {
        if self.config.is_configured() { Ok(()) } else { Err(StoreError::NotConfigured) }
    }
}

/// Map a readiness probe status. Any answer below 500 means the backend is
/// serving, including 403/404 from security rules on the collection listing.
fn classify_probe_status(status: u16) -> Result<(), StoreError> {
    if status >= 500 { Err(StoreError::Status(status)) } else { Ok(()) }
}

/// Map a lookup response status to "absent", "present" or an error.
fn classify_status(status: u16) -> Result<bool, StoreError> {
    match status {
        200..=299 => Ok(true),
        404 => Ok(false),
        other => Err(StoreError::Status(other)),
    }
}

#[async_trait(?Send)]
impl UserStore for FirestoreStore {
    async fn ready(&self) -> Result<(), StoreError> {
        self.ensure_configured()?;
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.config.probe_url())
                .send()
                .await
                .map_err(|e| StoreError::Request(e.to_string()))?;
            classify_probe_status(resp.status())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = classify_probe_status;
            Ok(())
        }
    }

    async fn fetch_user(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        self.ensure_configured()?;
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.document_url(email);
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| StoreError::Request(e.to_string()))?;
            if !classify_status(resp.status())? {
                return Ok(None);
            }
            let doc: super::firestore::Document =
                resp.json().await.map_err(|e| StoreError::Decode(e.to_string()))?;
            Ok(Some(UserRecord::from(doc)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, classify_status);
            Err(StoreError::Unavailable)
        }
    }
}
