//! Networking modules for the remote user store.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the `UserStore` seam and its Firestore REST adapter,
//! `firestore` decodes the REST document encoding, and `types` holds the
//! record shape the auth flow consumes.

pub mod api;
pub mod firestore;
pub mod types;
