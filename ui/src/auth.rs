//! # Session state shared by every view
//!
//! [`AuthProvider`] owns the [`ApiClient`] and a [`Signal<AuthState>`] and
//! puts both into context. On startup it restores a remembered session from
//! disk and pushes its token into the client before any view fires a request.
//!
//! State machine: `restoring` → `signed_out` ⇄ `signed_in`. Views watch the
//! signal and redirect once restore has settled; they must not redirect while
//! `loading` is still true or a remembered user would flash past the login
//! screen.

use api::ApiClient;
use dioxus::prelude::*;
use store::Session;

use crate::session::session_store;

#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    /// True until the persisted session has been checked.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            session: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn signed_in(session: Session) -> Self {
        Self {
            session: Some(session),
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            session: None,
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.user_id.as_str())
    }

    pub fn username(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.username.as_str())
    }
}

pub fn use_auth() -> Signal<AuthState> {
    use_context()
}

pub fn use_api() -> ApiClient {
    use_context()
}

/// Record a successful login: token into the client, session into UI state,
/// and onto disk when the user asked to be remembered.
pub fn complete_sign_in(auth: &mut Signal<AuthState>, client: &ApiClient, session: Session) {
    client.set_token(&session.token);
    session_store().save(&session);
    auth.set(AuthState::signed_in(session));
}

/// Explicit logout and the forced variant after a 401: clears the client
/// token, the persisted session, and UI state.
pub fn sign_out(auth: &mut Signal<AuthState>, client: &ApiClient) {
    client.clear_token();
    session_store().clear();
    auth.set(AuthState::signed_out());
}

#[component]
pub fn AuthProvider(children: Element) -> Element {
    let client = use_context_provider(ApiClient::from_env);
    let mut auth = use_context_provider(|| Signal::new(AuthState::default()));

    let restore_client = client.clone();
    use_effect(move || {
        match session_store().load() {
            Some(session) => {
                tracing::info!(user = %session.username, "restored remembered session");
                restore_client.set_token(&session.token);
                auth.set(AuthState::signed_in(session));
            }
            None => auth.set(AuthState::signed_out()),
        }
    });

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::from_login("jwt", "2099-01-01T00:00:00Z", "u1", "tester", false)
    }

    #[test]
    fn starts_restoring() {
        let state = AuthState::default();
        assert!(state.loading);
        assert!(!state.is_authenticated());
    }

    #[test]
    fn login_sets_authenticated_state() {
        let state = AuthState::signed_in(session());
        assert!(state.is_authenticated());
        assert_eq!(state.user_id(), Some("u1"));
        assert_eq!(state.username(), Some("tester"));
        assert!(!state.loading);
    }

    #[test]
    fn logout_clears_authenticated_state() {
        let state = AuthState::signed_out();
        assert!(!state.is_authenticated());
        assert_eq!(state.user_id(), None);
        assert!(!state.loading);
    }
}
