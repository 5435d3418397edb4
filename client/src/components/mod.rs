//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome and small building blocks while reading
//! shared state from Leptos context providers.

pub mod calculator_frame;
pub mod plan_card;
pub mod theme_toggle;
pub mod user_info;
