use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use async_trait::async_trait;
use futures::executor::block_on;
use serde_json::json;
use time::macros::datetime;

use super::*;
use crate::net::types::{ExpiresAt, UserRecord};
use crate::util::storage::MemoryStorage;

const KEY: &str = "freepro_user";
const EMAIL: &str = "ana@example.com";
const PASSWORD: &str = "secret123";

fn now() -> OffsetDateTime {
    datetime!(2030-06-15 12:00:00 UTC)
}

#[derive(Default)]
struct FakeStore {
    users: RefCell<HashMap<String, UserRecord>>,
    fail: RefCell<Option<StoreError>>,
    calls: Cell<usize>,
}

#[async_trait(?Send)]
impl UserStore for FakeStore {
    async fn ready(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn fetch_user(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        self.calls.set(self.calls.get() + 1);
        if let Some(e) = self.fail.borrow().clone() {
            return Err(e);
        }
        Ok(self.users.borrow().get(email).cloned())
    }
}

fn record(status: &str, expires_at: &str) -> UserRecord {
    let mut extra = serde_json::Map::new();
    extra.insert("plan".to_owned(), json!("biannual"));
    UserRecord {
        status: Some(status.to_owned()),
        expires_at: Some(ExpiresAt::Text(expires_at.to_owned())),
        password: Some(PASSWORD.to_owned()),
        extra,
    }
}

fn controller_with(user: Option<UserRecord>) -> AuthController<FakeStore, MemoryStorage> {
    let store = FakeStore::default();
    if let Some(user) = user {
        store.users.borrow_mut().insert(EMAIL.to_owned(), user);
    }
    AuthController::new(store, SessionCache::new(MemoryStorage::default(), KEY)).with_clock(now)
}

fn active() -> UserRecord {
    record("active", "2031-01-01T00:00:00Z")
}

fn lapsed() -> UserRecord {
    record("active", "2030-01-01T00:00:00Z")
}

fn stored(ctl: &AuthController<FakeStore, MemoryStorage>) -> Option<serde_json::Value> {
    ctl.cache().store().get(KEY).map(|raw| serde_json::from_str(&raw).unwrap())
}

// =============================================================
// validate_credentials
// =============================================================

#[test]
fn validate_trims_email() {
    assert_eq!(validate_credentials("  a@b.c ", "123456"), Ok("a@b.c".to_owned()));
}

#[test]
fn validate_rejects_blank_email() {
    assert_eq!(validate_credentials("   ", "123456"), Err(AuthError::EmailRequired));
}

#[test]
fn validate_rejects_short_password() {
    assert_eq!(validate_credentials("a@b.c", ""), Err(AuthError::PasswordTooShort));
    assert_eq!(validate_credentials("a@b.c", "12345"), Err(AuthError::PasswordTooShort));
}

// =============================================================
// login
// =============================================================

#[test]
fn malformed_input_fails_before_any_lookup() {
    let ctl = controller_with(Some(active()));
    for (email, password) in [("", PASSWORD), (EMAIL, ""), (EMAIL, "abc"), ("  ", "12345")] {
        assert!(block_on(ctl.login(email, password)).is_err());
    }
    assert_eq!(ctl.store().calls.get(), 0);
    assert!(stored(&ctl).is_none());
}

#[test]
fn unknown_user_is_rejected() {
    let ctl = controller_with(None);
    assert_eq!(block_on(ctl.login(EMAIL, PASSWORD)), Err(AuthError::UserNotFound));
    assert!(ctl.state().session.is_none());
}

#[test]
fn wrong_password_is_rejected() {
    let ctl = controller_with(Some(active()));
    assert_eq!(block_on(ctl.login(EMAIL, "wrong-password")), Err(AuthError::IncorrectPassword));
    assert!(stored(&ctl).is_none());
}

#[test]
fn record_without_password_is_rejected() {
    let mut user = active();
    user.password = None;
    let ctl = controller_with(Some(user));
    assert_eq!(block_on(ctl.login(EMAIL, PASSWORD)), Err(AuthError::IncorrectPassword));
}

#[test]
fn valid_subscription_grants_main_view() {
    let ctl = controller_with(Some(active()));

    assert_eq!(block_on(ctl.login(EMAIL, PASSWORD)), Ok(LoginOutcome::Granted));

    let state = ctl.state();
    assert_eq!(state.view(), View::Main);
    let session = state.session.unwrap();
    assert_eq!(session.subscription_valid, Some(true));
    assert_eq!(session.email, EMAIL);

    let blob = stored(&ctl).unwrap();
    assert_eq!(blob["subscriptionValid"], json!(true));
    assert_eq!(blob["plan"], json!("biannual"));
    assert!(blob.get("password").is_none());
}

#[test]
fn login_trims_email_before_lookup() {
    let ctl = controller_with(Some(active()));
    assert_eq!(block_on(ctl.login("  ana@example.com ", PASSWORD)), Ok(LoginOutcome::Granted));
    assert_eq!(ctl.state().email(), Some(EMAIL));
}

#[test]
fn expired_subscription_shows_expired_screen_and_persists() {
    let ctl = controller_with(Some(lapsed()));

    assert_eq!(block_on(ctl.login(EMAIL, PASSWORD)), Ok(LoginOutcome::Expired));

    assert_eq!(ctl.state().view(), View::Auth(AuthScreen::Expired));
    let blob = stored(&ctl).unwrap();
    assert_eq!(blob["email"], json!(EMAIL));
    assert!(blob.get("subscriptionValid").is_none());
}

#[test]
fn expiry_exactly_now_is_expired() {
    let ctl = controller_with(Some(record("active", "2030-06-15T12:00:00Z")));
    assert_eq!(block_on(ctl.login(EMAIL, PASSWORD)), Ok(LoginOutcome::Expired));
}

#[test]
fn space_separated_expiry_grants_access() {
    let ctl = controller_with(Some(record("active", "2031-12-31 23:59:59")));
    assert_eq!(block_on(ctl.login(EMAIL, PASSWORD)), Ok(LoginOutcome::Granted));
    assert_eq!(ctl.state().view(), View::Main);
}

#[test]
fn inactive_subscription_fails_without_session() {
    let ctl = controller_with(Some(record("suspended", "2031-01-01T00:00:00Z")));
    assert_eq!(block_on(ctl.login(EMAIL, PASSWORD)), Err(AuthError::SubscriptionInactive));
    assert!(ctl.state().session.is_none());
    assert!(stored(&ctl).is_none());
}

#[test]
fn invalid_date_fails_with_reason() {
    let ctl = controller_with(Some(record("active", "someday")));
    assert_eq!(
        block_on(ctl.login(EMAIL, PASSWORD)),
        Err(AuthError::SubscriptionCheck(CheckReason::InvalidDate))
    );
    assert!(stored(&ctl).is_none());
}

#[test]
fn store_failure_surfaces_as_error() {
    let ctl = controller_with(Some(active()));
    *ctl.store().fail.borrow_mut() = Some(StoreError::Status(503));
    let err = block_on(ctl.login(EMAIL, PASSWORD)).unwrap_err();
    assert_eq!(err, AuthError::Store(StoreError::Status(503)));
    assert!(err.to_string().contains("503"));
}

// =============================================================
// check_subscription
// =============================================================

#[test]
fn check_subscription_reports_reasons() {
    let ctl = controller_with(Some(lapsed()));
    assert_eq!(block_on(ctl.check_subscription(EMAIL)).reason(), Some(CheckReason::Expired));
    assert_eq!(block_on(ctl.check_subscription("nobody@example.com")).reason(), Some(CheckReason::UserNotFound));
}

#[test]
fn check_subscription_degrades_store_errors() {
    let ctl = controller_with(Some(active()));
    *ctl.store().fail.borrow_mut() = Some(StoreError::Request("offline".to_owned()));
    let check = block_on(ctl.check_subscription(EMAIL));
    assert_eq!(check.reason(), Some(CheckReason::Error));
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_twice_leaves_everything_empty() {
    let ctl = controller_with(Some(active()));
    block_on(ctl.login(EMAIL, PASSWORD)).unwrap();

    for _ in 0..2 {
        ctl.logout();
        assert!(ctl.state().session.is_none());
        assert!(ctl.cache().store().is_empty());
        assert_eq!(ctl.state().view(), View::Auth(AuthScreen::Login));
    }
}

// =============================================================
// auto_login
// =============================================================

#[test]
fn auto_login_without_saved_session_shows_login() {
    let ctl = controller_with(Some(active()));
    assert_eq!(block_on(ctl.auto_login()), View::Auth(AuthScreen::Login));
    assert_eq!(ctl.store().calls.get(), 0);
}

#[test]
fn auto_login_round_trips_login_session() {
    let ctl = controller_with(Some(active()));
    block_on(ctl.login(EMAIL, PASSWORD)).unwrap();
    let after_login = ctl.state().session;
    let blob_after_login = stored(&ctl);

    // Fresh controller over the same storage, as after a page reload.
    let AuthController { store, cache, .. } = ctl;
    let reloaded = AuthController::new(store, cache).with_clock(now);

    assert_eq!(block_on(reloaded.auto_login()), View::Main);
    assert_eq!(reloaded.state().session, after_login);
    assert_eq!(stored(&reloaded), blob_after_login);
}

#[test]
fn auto_login_expired_drops_validity() {
    let ctl = controller_with(Some(active()));
    block_on(ctl.login(EMAIL, PASSWORD)).unwrap();
    ctl.store().users.borrow_mut().insert(EMAIL.to_owned(), lapsed());

    assert_eq!(block_on(ctl.auto_login()), View::Auth(AuthScreen::Expired));
    let blob = stored(&ctl).unwrap();
    assert!(blob.get("subscriptionValid").is_none());
    assert_eq!(blob["expiresAt"], json!("2030-01-01T00:00:00Z"));
}

#[test]
fn auto_login_renewed_subscription_restores_access() {
    let ctl = controller_with(Some(lapsed()));
    block_on(ctl.login(EMAIL, PASSWORD)).unwrap();
    ctl.store().users.borrow_mut().insert(EMAIL.to_owned(), active());

    assert_eq!(block_on(ctl.auto_login()), View::Main);
    assert_eq!(stored(&ctl).unwrap()["subscriptionValid"], json!(true));
}

#[test]
fn auto_login_inactive_logs_out() {
    let ctl = controller_with(Some(active()));
    block_on(ctl.login(EMAIL, PASSWORD)).unwrap();
    ctl.store().users.borrow_mut().insert(EMAIL.to_owned(), record("cancelled", "2031-01-01"));

    assert_eq!(block_on(ctl.auto_login()), View::Auth(AuthScreen::Login));
    assert!(ctl.state().session.is_none());
    assert!(stored(&ctl).is_none());
}

#[test]
fn auto_login_store_error_logs_out() {
    let ctl = controller_with(Some(active()));
    block_on(ctl.login(EMAIL, PASSWORD)).unwrap();
    *ctl.store().fail.borrow_mut() = Some(StoreError::Request("offline".to_owned()));

    assert_eq!(block_on(ctl.auto_login()), View::Auth(AuthScreen::Login));
    assert!(stored(&ctl).is_none());
}

#[test]
fn auto_login_corrupt_blob_logs_out() {
    let ctl = controller_with(Some(active()));
    ctl.cache().store().set(KEY, "{\"email\":");

    assert_eq!(block_on(ctl.auto_login()), View::Auth(AuthScreen::Login));
    assert!(ctl.cache().store().is_empty());
    assert_eq!(ctl.store().calls.get(), 0);
}

#[test]
fn auto_login_blank_email_logs_out() {
    let ctl = controller_with(Some(active()));
    ctl.cache().store().set(KEY, "{\"email\":\"  \",\"subscriptionValid\":true}");

    assert_eq!(block_on(ctl.auto_login()), View::Auth(AuthScreen::Login));
    assert!(ctl.cache().store().is_empty());
}

// =============================================================
// Notifications
// =============================================================

#[test]
fn every_transition_notifies_subscribers() {
    let ctl = controller_with(Some(active()));
    let views = std::rc::Rc::new(RefCell::new(Vec::new()));
    {
        let views = views.clone();
        ctl.subscribe(move |state| {
            views.borrow_mut().push(state.view());
            Ok(())
        });
    }
    ctl.subscribe(|_| Err("renderer gone".to_owned()));

    block_on(ctl.auto_login());
    ctl.show_screen(AuthScreen::Plans);
    block_on(ctl.login(EMAIL, PASSWORD)).unwrap();
    ctl.logout();

    assert_eq!(
        *views.borrow(),
        vec![
            View::Auth(AuthScreen::Login),
            View::Auth(AuthScreen::Plans),
            View::Main,
            View::Auth(AuthScreen::Login),
        ]
    );
}

#[test]
fn failed_login_does_not_notify() {
    let ctl = controller_with(None);
    let count = std::rc::Rc::new(Cell::new(0));
    {
        let count = count.clone();
        ctl.subscribe(move |_| {
            count.set(count.get() + 1);
            Ok(())
        });
    }
    let _ = block_on(ctl.login(EMAIL, PASSWORD));
    assert_eq!(count.get(), 0);
}
