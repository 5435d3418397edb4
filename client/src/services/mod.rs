//! Controllers that drive state transitions.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` owns the auth state and talks to the user store and the session
//! cache; `startup` sequences backend readiness and session restore at page
//! load. Pages call into these and render the resulting state.

pub mod auth;
pub mod startup;
