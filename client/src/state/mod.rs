//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `session`, `subscription`, `ui`) so the
//! auth state machine can be tested without a browser and pages depend only on
//! the small models they render.

pub mod auth;
pub mod hub;
pub mod plans;
pub mod session;
pub mod subscription;
pub mod ui;
