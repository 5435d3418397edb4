//! Subscription check: validate a record's `status` and `expiresAt`.
//!
//! The check never raises. Every failure becomes a [`CheckReason`] so the auth
//! flow can branch on it.

#[cfg(test)]
#[path = "subscription_test.rs"]
mod subscription_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::net::types::UserRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckReason {
    UserNotFound,
    Inactive,
    InvalidDate,
    Expired,
    Error,
}

impl CheckReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UserNotFound => "user_not_found",
            Self::Inactive => "inactive",
            Self::InvalidDate => "invalid_date",
            Self::Expired => "expired",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for CheckReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a subscription check.
#[derive(Clone, Debug, PartialEq)]
pub enum SubscriptionCheck {
    Valid {
        record: UserRecord,
    },
    Invalid {
        reason: CheckReason,
        record: Option<UserRecord>,
        error: Option<String>,
    },
}

impl SubscriptionCheck {
    /// The lookup itself failed.
    pub fn failed(error: impl Into<String>) -> Self {
        Self::Invalid { reason: CheckReason::Error, record: None, error: Some(error.into()) }
    }

    #[cfg(test)]
    pub(crate) fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    /// `None` when valid.
    pub fn reason(&self) -> Option<CheckReason> {
        match self {
            Self::Valid { .. } => None,
            Self::Invalid { reason, .. } => Some(*reason),
        }
    }
}

/// Evaluate a fetched record against `now`.
///
/// Order matters: a missing record wins over everything, a non-active status
/// wins over any date, and an expiry equal to `now` counts as expired.
pub fn evaluate(record: Option<UserRecord>, now: OffsetDateTime) -> SubscriptionCheck {
    let Some(record) = record else {
        return SubscriptionCheck::Invalid { reason: CheckReason::UserNotFound, record: None, error: None };
    };
    if !record.is_active() {
        return invalid(CheckReason::Inactive, record);
    }
    let Some(expires_at) = record.expires_at.as_ref().and_then(|e| e.resolve()) else {
        return invalid(CheckReason::InvalidDate, record);
    };
    if expires_at <= now {
        return invalid(CheckReason::Expired, record);
    }
    SubscriptionCheck::Valid { record }
}

fn invalid(reason: CheckReason, record: UserRecord) -> SubscriptionCheck {
    SubscriptionCheck::Invalid { reason, record: Some(record), error: None }
}
