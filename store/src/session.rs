//! # Session model
//!
//! A [`Session`] is created from a successful login response and is the only
//! durable authentication state in the app. Invariant: a token being present
//! means the user is authenticated; an expired session must never be handed
//! back to the app, which [`crate::SessionStore::load`] enforces.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Fallback lifetime when the server sends an unparsable expiration string.
const FALLBACK_LIFETIME_HOURS: i64 = 24;

/// An authenticated session as held in UI state and, when `remember_me` is
/// set, persisted to disk.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub expiration: DateTime<Utc>,
    pub user_id: String,
    pub username: String,
    #[serde(default)]
    pub remember_me: bool,
}

impl Session {
    /// Build a session from the login response fields.
    ///
    /// `expiration` is the ISO-8601 string from the server; if it does not
    /// parse, the session falls back to a 24-hour lifetime so a malformed
    /// server response cannot produce a token that never expires.
    pub fn from_login(
        token: impl Into<String>,
        expiration: &str,
        user_id: impl Into<String>,
        username: impl Into<String>,
        remember_me: bool,
    ) -> Self {
        let expiration = DateTime::parse_from_rfc3339(expiration)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| {
                tracing::warn!("unparsable session expiration {expiration:?}, using fallback");
                Utc::now() + Duration::hours(FALLBACK_LIFETIME_HOURS)
            });
        Self {
            token: token.into(),
            expiration,
            user_id: user_id.into(),
            username: username.into(),
            remember_me,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expiration <= Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_server_expiration() {
        let session = Session::from_login("t", "2099-01-01T00:00:00Z", "u1", "tester", false);
        assert_eq!(session.expiration.to_rfc3339(), "2099-01-01T00:00:00+00:00");
        assert!(!session.is_expired());
    }

    #[test]
    fn expired_session_is_detected() {
        let session = Session::from_login("t", "2001-01-01T00:00:00Z", "u1", "tester", true);
        assert!(session.is_expired());
    }

    #[test]
    fn malformed_expiration_falls_back() {
        let session = Session::from_login("t", "not-a-date", "u1", "tester", false);
        assert!(!session.is_expired());
        assert!(session.expiration <= Utc::now() + Duration::hours(FALLBACK_LIFETIME_HOURS));
    }
}
