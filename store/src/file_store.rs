//! # File-backed session persistence
//!
//! [`SessionStore`] keeps the session as a TOML file under a base directory
//! chosen by the caller (the ui crate passes the platform data dir, e.g.
//! `~/.local/share/clientbook/` on Linux).
//!
//! Persistence rules:
//! - `save` writes only sessions flagged `remember_me`; everything else lives
//!   exclusively in UI state and dies with the process.
//! - `load` never returns an expired session and removes the stale file when
//!   it finds one.
//! - `clear` is logout: the file is deleted.

use std::path::PathBuf;

use crate::session::Session;

/// The well-known filename inside the base directory.
const SESSION_FILE: &str = "session.toml";

/// TOML-file persistence for the authenticated session.
#[derive(Clone, Debug)]
pub struct SessionStore {
    base: PathBuf,
}

impl SessionStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn session_path(&self) -> PathBuf {
        self.base.join(SESSION_FILE)
    }

    /// Load the persisted session, if any. Unreadable, unparsable, or expired
    /// files yield `None`; an expired file is deleted on sight.
    pub fn load(&self) -> Option<Session> {
        let content = std::fs::read_to_string(self.session_path()).ok()?;
        let session: Session = match toml::from_str(&content) {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!("ignoring unparsable session file: {e}");
                return None;
            }
        };
        if session.is_expired() {
            self.clear();
            return None;
        }
        Some(session)
    }

    /// Persist the session when it is flagged `remember_me`; no-op otherwise.
    pub fn save(&self, session: &Session) {
        if !session.remember_me {
            return;
        }
        let content = match toml::to_string_pretty(session) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("failed to serialize session: {e}");
                return;
            }
        };
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::warn!("failed to create session dir: {e}");
            return;
        }
        if let Err(e) = std::fs::write(self.session_path(), content) {
            tracing::warn!("failed to write session file: {e}");
        }
    }

    /// Delete the persisted session (logout).
    pub fn clear(&self) {
        let _ = std::fs::remove_file(self.session_path());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;

    fn temp_store(tag: &str) -> SessionStore {
        let dir = std::env::temp_dir().join(format!("clientbook_test_{tag}_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        SessionStore::new(dir)
    }

    #[test]
    fn save_and_load_roundtrip() {
        let store = temp_store("roundtrip");

        let session = Session::from_login("jwt", "2099-01-01T00:00:00Z", "u1", "tester", true);
        store.save(&session);

        let loaded = store.load().expect("session should persist");
        assert_eq!(loaded, session);

        store.clear();
        assert!(store.load().is_none());
        let _ = std::fs::remove_dir_all(&store.base);
    }

    #[test]
    fn non_remembered_session_never_touches_disk() {
        let store = temp_store("ephemeral");

        let session = Session::from_login("jwt", "2099-01-01T00:00:00Z", "u1", "tester", false);
        store.save(&session);

        assert!(store.load().is_none());
        assert!(!store.session_path().exists());
        let _ = std::fs::remove_dir_all(&store.base);
    }

    #[test]
    fn expired_session_is_dropped_and_removed() {
        let store = temp_store("expired");

        let session = Session::from_login("jwt", "2001-01-01T00:00:00Z", "u1", "tester", true);
        store.save(&session);
        assert!(store.session_path().exists());

        assert!(store.load().is_none());
        assert!(!store.session_path().exists());
        let _ = std::fs::remove_dir_all(&store.base);
    }

    #[test]
    fn garbage_file_is_ignored() {
        let store = temp_store("garbage");
        let _ = std::fs::create_dir_all(&store.base);
        let _ = std::fs::write(store.session_path(), "not toml at all [");

        assert!(store.load().is_none());
        let _ = std::fs::remove_dir_all(&store.base);
    }
}
