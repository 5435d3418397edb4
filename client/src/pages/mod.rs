//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `home` is the only route. It switches between the boot screen, the
//! signed-out screens, and the calculators, and delegates rendering details
//! to `components`.

pub mod auth_screens;
pub mod calculators;
pub mod error;
pub mod expired;
pub mod home;
pub mod login;
pub mod plans;
