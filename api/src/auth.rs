//! Authentication endpoints: `/Authenticate/login` and `/Authenticate/register`.

use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::ApiError;

/// Credentials for `/Authenticate/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Payload for `/Authenticate/register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Successful authentication response.
///
/// `expiration` is an ISO-8601 timestamp string as sent by the server; the
/// store crate parses it when building the persisted session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub expiration: String,
    #[serde(rename = "userid")]
    pub user_id: String,
    pub username: String,
}

impl ApiClient {
    /// Exchange credentials for a session token.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthSession, ApiError> {
        self.post_json("/Authenticate/login", request).await
    }

    /// Create an account. The server signs the new user in and returns a
    /// session, but the UI sends the user back to the login view instead of
    /// consuming it.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthSession, ApiError> {
        self.post_json("/Authenticate/register", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_session_uses_wire_names() {
        let json = r#"{
            "token": "jwt-token",
            "expiration": "2026-09-01T12:00:00Z",
            "userid": "user-1",
            "username": "tester"
        }"#;
        let session: AuthSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.user_id, "user-1");
        assert_eq!(session.token, "jwt-token");
    }
}
