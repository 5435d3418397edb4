//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the pure half of the auth flow: a state value plus a transition
//! function. The controller in `services::auth` produces events; the pages
//! render whatever [`AuthState::view`] says. Nothing here touches the browser.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::session::Session;

/// The three mutually exclusive auth screens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthScreen {
    #[default]
    Login,
    Expired,
    Plans,
}

impl AuthScreen {
    /// Element id of the screen container.
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Login => "loginScreen",
            Self::Expired => "expiredScreen",
            Self::Plans => "plansScreen",
        }
    }
}

/// What the app should render for a given state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Auth(AuthScreen),
    Main,
}

/// Transitions the controller applies to [`AuthState`].
#[derive(Clone, Debug, PartialEq)]
pub enum AuthEvent {
    /// Subscription confirmed; the session carries `subscription_valid`.
    SignedIn(Session),
    /// Credentials fine but the subscription lapsed.
    SubscriptionExpired(Session),
    SignedOut,
    /// User navigation between auth screens.
    Navigate(AuthScreen),
}

/// Authentication state tracking the current session and visible auth screen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub screen: AuthScreen,
}

impl AuthState {
    pub fn apply(&mut self, event: AuthEvent) {
        match event {
            AuthEvent::SignedIn(session) => {
                self.session = Some(session);
                self.screen = AuthScreen::Login;
            }
            AuthEvent::SubscriptionExpired(session) => {
                self.session = Some(session.revoked());
                self.screen = AuthScreen::Expired;
            }
            AuthEvent::SignedOut => {
                self.session = None;
                self.screen = AuthScreen::Login;
            }
            AuthEvent::Navigate(screen) => self.screen = screen,
        }
    }

    /// Main app only with a session whose subscription was confirmed.
    pub fn view(&self) -> View {
        match &self.session {
            Some(session) if session.is_subscription_valid() => View::Main,
            _ => View::Auth(self.screen),
        }
    }

    pub fn email(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.email.as_str())
    }
}
