//! The signed-in user as held in memory and mirrored into local storage.
//!
//! DESIGN
//! ======
//! Serialized field names follow the remote record (`expiresAt`,
//! `subscriptionValid`) and unknown subscription fields are flattened back to
//! the top level, so the stored JSON looks like the record it came from. The
//! remote password never enters a session.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use time::OffsetDateTime;

use crate::net::types::{ExpiresAt, RESERVED_KEYS, UserRecord};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<ExpiresAt>,
    /// Set only when the last subscription check passed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_valid: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Session {
    /// Build a session for `email` from a freshly fetched record.
    pub fn from_record(email: &str, record: &UserRecord) -> Self {
        let mut session = Self {
            email: email.to_owned(),
            status: None,
            expires_at: None,
            subscription_valid: None,
            extra: Map::new(),
        };
        session.merge_record(record);
        session
    }

    /// Overlay remote fields onto this session. Saved fields the record lacks
    /// are kept.
    pub fn merge_record(&mut self, record: &UserRecord) {
        if record.status.is_some() {
            self.status.clone_from(&record.status);
        }
        if record.expires_at.is_some() {
            self.expires_at.clone_from(&record.expires_at);
        }
        for (key, value) in &record.extra {
            self.extra.insert(key.clone(), value.clone());
        }
        for key in RESERVED_KEYS {
            self.extra.remove(key);
        }
    }

    /// Mark the subscription as checked and valid.
    #[must_use]
    pub fn granted(mut self) -> Self {
        self.subscription_valid = Some(true);
        self
    }

    /// Drop any earlier validity flag.
    #[must_use]
    pub fn revoked(mut self) -> Self {
        self.subscription_valid = None;
        self
    }

    pub fn is_subscription_valid(&self) -> bool {
        self.subscription_valid == Some(true)
    }

    /// A session must carry an e-mail; anything else is a corrupted cache entry.
    pub fn has_identity(&self) -> bool {
        !self.email.trim().is_empty()
    }

    pub fn status_label(&self) -> &'static str {
        if self.status.as_deref() == Some("active") { "Active" } else { "Expired" }
    }

    pub fn expires_on(&self) -> Option<OffsetDateTime> {
        self.expires_at.as_ref().and_then(ExpiresAt::resolve)
    }
}
