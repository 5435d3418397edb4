//! Auth controller: login, logout, stored-session restore, subscription checks.
//!
//! ARCHITECTURE
//! ============
//! The controller owns the [`StateHub`] holding [`AuthState`] and is the only
//! writer. It talks to the remote store through [`UserStore`] and to local
//! persistence through [`SessionCache`]; both are injected so the whole flow
//! runs under plain unit tests.
//!
//! ERROR HANDLING
//! ==============
//! `login` reports user-facing failures as [`AuthError`]. Subscription checks
//! never fail; they return a [`CheckReason`]. `auto_login` has no error path:
//! anything it cannot make sense of ends in `logout`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::rc::Rc;

use time::OffsetDateTime;

use crate::net::api::{StoreError, UserStore};
use crate::state::auth::{AuthEvent, AuthScreen, AuthState, View};
use crate::state::hub::StateHub;
use crate::state::session::Session;
use crate::state::subscription::{self, CheckReason, SubscriptionCheck};
use crate::util::storage::{KeyValueStore, SessionCache};

pub const MIN_PASSWORD_LEN: usize = 6;

/// Errors surfaced to the user by `login`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("E-mail is required.")]
    EmailRequired,

    #[error("Password must be at least 6 characters.")]
    PasswordTooShort,

    #[error("User not found.")]
    UserNotFound,

    #[error("Incorrect password.")]
    IncorrectPassword,

    #[error("Subscription inactive. Contact support.")]
    SubscriptionInactive,

    #[error("Subscription check failed: {0}")]
    SubscriptionCheck(CheckReason),

    #[error("Could not reach the user database: {0}")]
    Store(#[from] StoreError),
}

/// Successful `login` results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Subscription valid; the main app is unlocked.
    Granted,
    /// Credentials accepted but the subscription lapsed.
    Expired,
}

/// Check credentials locally. Returns the trimmed e-mail.
pub fn validate_credentials(email: &str, password: &str) -> Result<String, AuthError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(AuthError::EmailRequired);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::PasswordTooShort);
    }
    Ok(email.to_owned())
}

pub struct AuthController<S, K> {
    store: S,
    cache: SessionCache<K>,
    hub: Rc<StateHub<AuthState>>,
    clock: fn() -> OffsetDateTime,
}

impl<S: UserStore, K: KeyValueStore> AuthController<S, K> {
    pub fn new(store: S, cache: SessionCache<K>) -> Self {
        Self { store, cache, hub: Rc::new(StateHub::default()), clock: OffsetDateTime::now_utc }
    }

    /// Replace the time source used for expiry comparisons.
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> OffsetDateTime) -> Self {
        self.clock = clock;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn cache(&self) -> &SessionCache<K> {
        &self.cache
    }

    pub fn state(&self) -> AuthState {
        self.hub.get()
    }

    pub fn hub(&self) -> Rc<StateHub<AuthState>> {
        self.hub.clone()
    }

    /// Register for state changes.
    pub fn subscribe<F>(&self, subscriber: F)
    where
        F: Fn(&AuthState) -> Result<(), String> + 'static,
    {
        self.hub.subscribe(subscriber);
    }

    /// Sign in with e-mail and password.
    ///
    /// # Errors
    ///
    /// Returns the first failing step: local validation (before any network
    /// call), lookup, password, or subscription status other than expiry.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AuthError> {
        let email = validate_credentials(email, password)?;

        let record = self.store.fetch_user(&email).await?.ok_or(AuthError::UserNotFound)?;
        if !record.password_matches(password) {
            return Err(AuthError::IncorrectPassword);
        }

        match subscription::evaluate(Some(record), (self.clock)()) {
            SubscriptionCheck::Valid { record } => {
                let session = Session::from_record(&email, &record).granted();
                self.commit(AuthEvent::SignedIn(session));
                log::info!("login granted for {email}");
                Ok(LoginOutcome::Granted)
            }
            SubscriptionCheck::Invalid { reason: CheckReason::Expired, record: Some(record), .. } => {
                let session = Session::from_record(&email, &record);
                self.commit(AuthEvent::SubscriptionExpired(session.revoked()));
                log::info!("login for {email}: subscription expired");
                Ok(LoginOutcome::Expired)
            }
            SubscriptionCheck::Invalid { reason: CheckReason::Inactive, .. } => Err(AuthError::SubscriptionInactive),
            SubscriptionCheck::Invalid { reason, .. } => Err(AuthError::SubscriptionCheck(reason)),
        }
    }

    /// Fetch the record for `email` and validate its subscription.
    pub async fn check_subscription(&self, email: &str) -> SubscriptionCheck {
        match self.store.fetch_user(email).await {
            Ok(record) => subscription::evaluate(record, (self.clock)()),
            Err(e) => {
                log::error!("subscription check for {email} failed: {e}");
                SubscriptionCheck::failed(e.to_string())
            }
        }
    }

    /// Forget the session everywhere and return to the login screen.
    pub fn logout(&self) {
        self.cache.clear();
        self.hub.update(|state| state.apply(AuthEvent::SignedOut));
    }

    /// Restore a stored session on page load, re-validating it remotely.
    pub async fn auto_login(&self) -> View {
        let saved = match self.cache.load() {
            Ok(Some(saved)) if saved.has_identity() => saved,
            Ok(Some(_)) => {
                log::warn!("stored session has no e-mail; discarding");
                self.logout();
                return self.state().view();
            }
            Ok(None) => {
                self.hub.update(|state| state.apply(AuthEvent::SignedOut));
                return self.state().view();
            }
            Err(e) => {
                log::error!("stored session unreadable: {e}");
                self.logout();
                return self.state().view();
            }
        };

        match self.check_subscription(&saved.email).await {
            SubscriptionCheck::Valid { record } => {
                let mut session = saved;
                session.merge_record(&record);
                self.commit(AuthEvent::SignedIn(session.granted()));
            }
            SubscriptionCheck::Invalid { reason: CheckReason::Expired, record: Some(record), .. } => {
                let mut session = saved;
                session.merge_record(&record);
                self.commit(AuthEvent::SubscriptionExpired(session.revoked()));
            }
            SubscriptionCheck::Invalid { reason, .. } => {
                log::info!("stored session for {} rejected: {reason}", saved.email);
                self.logout();
            }
        }
        self.state().view()
    }

    /// Switch between the login, expired and plans screens.
    pub fn show_screen(&self, screen: AuthScreen) {
        self.hub.update(|state| state.apply(AuthEvent::Navigate(screen)));
    }

    /// Persist the session carried by `event`, then apply it.
    fn commit(&self, event: AuthEvent) {
        if let AuthEvent::SignedIn(session) | AuthEvent::SubscriptionExpired(session) = &event {
            self.cache.save(session);
        }
        self.hub.update(|state| state.apply(event));
    }
}
