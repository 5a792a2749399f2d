//! Error type shared by every API call.

use thiserror::Error;

/// Failure modes of a call to the remote server.
///
/// [`ApiError::Unauthorized`] is special-cased by the UI: it forces a logout
/// and sends the user back to the login view. Everything else surfaces as a
/// transient toast.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network failure, timeout, or a body that did not decode.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server rejected the bearer token (HTTP 401).
    #[error("session expired or invalid")]
    Unauthorized,

    /// Any other non-success status, with the server's message when present.
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
}

impl ApiError {
    /// Whether this error should force a logout.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}
