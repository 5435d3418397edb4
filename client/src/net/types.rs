//! Shared DTOs for the user-store boundary.
//!
//! DESIGN
//! ======
//! `UserRecord` is what the remote store hands back for one e-mail key. Fields
//! the subscription check reads are typed; everything else rides along in
//! `extra` so the session can mirror arbitrary subscription metadata.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use time::OffsetDateTime;

use crate::util::date;

/// Record keys with dedicated fields; never copied into `extra`.
pub const RESERVED_KEYS: [&str; 4] = ["email", "status", "expiresAt", "password"];

/// Backend-native timestamp, shaped like the Firestore SDK's JSON form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamp {
    pub seconds: i64,
    pub nanoseconds: u32,
}

impl Timestamp {
    #[must_use]
    pub fn from_datetime(at: OffsetDateTime) -> Self {
        Self { seconds: at.unix_timestamp(), nanoseconds: at.nanosecond() }
    }

    /// Convert to a UTC date-time, or `None` when out of range.
    #[must_use]
    pub fn to_datetime(self) -> Option<OffsetDateTime> {
        let nanos = i128::from(self.seconds) * 1_000_000_000 + i128::from(self.nanoseconds);
        OffsetDateTime::from_unix_timestamp_nanos(nanos).ok()
    }
}

/// The `expiresAt` field as stored: either a date string or a native timestamp.
///
/// Anything else is kept verbatim so it survives a session round-trip, but it
/// never resolves to a date.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExpiresAt {
    Text(String),
    Timestamp(Timestamp),
    Other(Value),
}

impl ExpiresAt {
    /// Resolve to a concrete instant. `None` means the date is unusable.
    #[must_use]
    pub fn resolve(&self) -> Option<OffsetDateTime> {
        match self {
            Self::Text(raw) => date::parse_date_like(raw),
            Self::Timestamp(ts) => ts.to_datetime(),
            Self::Other(_) => None,
        }
    }
}

/// A user document fetched from the remote store.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserRecord {
    /// Subscription status; `None` when missing or not a string.
    pub status: Option<String>,
    pub expires_at: Option<ExpiresAt>,
    /// Stored password in string form (numeric passwords are stringified).
    pub password: Option<String>,
    /// Remaining subscription fields as plain JSON.
    pub extra: Map<String, Value>,
}

impl UserRecord {
    /// Whether the record's `status` is exactly `"active"`.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status.as_deref() == Some("active")
    }

    /// Compare the stored password with a candidate. A record without a
    /// password never matches.
    #[must_use]
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password.as_deref().is_some_and(|stored| stored == candidate)
    }
}
