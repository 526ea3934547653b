use std::collections::BTreeSet;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of the session validity window, in seconds (24 hours).
pub const SESSION_WINDOW_SECS: i64 = 24 * 60 * 60;

/// An authenticated editor identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
    pub permissions: BTreeSet<String>,
}

impl UserIdentity {
    /// Whether this identity carries the named permission.
    pub fn can(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }
}

/// A time-boxed login session.
///
/// Invariant: `expires_at = issued_at + SESSION_WINDOW_SECS` at issue
/// time. A refresh extends `expires_at` from the refresh time, not from
/// `issued_at`. A session observed past `expires_at` is treated as absent
/// and purged by the gate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub user: UserIdentity,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Issue a new session for `user`, valid for the full window from `now`.
    pub fn issue(user: UserIdentity, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::now_v7(),
            user,
            issued_at: now,
            expires_at: now + Duration::seconds(SESSION_WINDOW_SECS),
        }
    }

    /// Whether the session has passed its expiry instant.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Extend the session for a full window from `now`.
    pub fn refresh(&mut self, now: DateTime<Utc>) {
        self.expires_at = now + Duration::seconds(SESSION_WINDOW_SECS);
    }

    /// Time left before expiry. Zero once expired.
    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        (self.expires_at - now).max(Duration::zero())
    }
}
