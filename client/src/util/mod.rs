//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, window
//! actions, theme, dates) from page and component logic.

pub mod browser;
pub mod dark_mode;
pub mod date;
pub mod storage;
