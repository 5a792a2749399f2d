//! HTTP transport for the remote API.
//!
//! [`ApiClient`] owns a `reqwest::Client`, the server base URL, and the
//! current bearer token. The token slot is shared across clones so the
//! instance stored in UI context and the copies captured by async tasks all
//! observe the same login/logout.
//!
//! Status mapping: HTTP 401 becomes [`ApiError::Unauthorized`]; any other
//! non-success status becomes [`ApiError::Status`] carrying the server's
//! message body when one is present.

use std::sync::{Arc, RwLock};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::ApiError;

/// Typed HTTP client for the Clientbook server.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("falling back to default HTTP client: {e}");
                reqwest::Client::new()
            });
        Self {
            http,
            base_url: config.base_url,
            token: Arc::new(RwLock::new(None)),
        }
    }

    /// Build a client from `CLIENTBOOK_API_*` environment variables.
    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    /// Store the bearer token attached to every subsequent request.
    pub fn set_token(&self, token: &str) {
        if let Ok(mut slot) = self.token.write() {
            *slot = Some(token.to_string());
        }
    }

    /// Drop the bearer token (logout or forced logout on 401).
    pub fn clear_token(&self) {
        if let Ok(mut slot) = self.token.write() {
            *slot = None;
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn with_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let token = self.token.read().ok().and_then(|slot| slot.clone());
        match token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.with_auth(self.http.get(self.url(path))).send().await?;
        Self::decode(response).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .with_auth(self.http.post(self.url(path)).json(body))
            .send()
            .await?;
        Self::decode(response).await
    }

    /// POST where the response body is irrelevant to the caller.
    pub(crate) async fn post_unit<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let response = self
            .with_auth(self.http.post(self.url(path)).json(body))
            .send()
            .await?;
        Self::check(response).await.map(|_| ())
    }

    pub(crate) async fn put_unit<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let response = self
            .with_auth(self.http.put(self.url(path)).json(body))
            .send()
            .await?;
        Self::check(response).await.map(|_| ())
    }

    pub(crate) async fn delete_unit(&self, path: &str) -> Result<(), ApiError> {
        let response = self.with_auth(self.http.delete(self.url(path))).send().await?;
        Self::check(response).await.map(|_| ())
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        Ok(Self::check(response).await?.json::<T>().await?)
    }
}

/// Extract a human-readable message from an error body.
///
/// The server usually answers with `{"message": "..."}`; fall back to the raw
/// body, then to a generic message for empty responses.
fn error_message(body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: String,
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.message;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "request failed".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_json_message() {
        assert_eq!(
            error_message(r#"{"message": "Cliente no encontrado"}"#),
            "Cliente no encontrado"
        );
    }

    #[test]
    fn error_message_falls_back_to_body() {
        assert_eq!(error_message("Internal Server Error"), "Internal Server Error");
        assert_eq!(error_message("   "), "request failed");
    }

    #[test]
    fn token_slot_is_shared_across_clones() {
        let client = ApiClient::new(ApiConfig::default());
        let copy = client.clone();

        fn token_of(client: &ApiClient) -> Option<String> {
            client.token.read().unwrap().clone()
        }

        assert_eq!(token_of(&copy), None);
        client.set_token("abc123");
        assert_eq!(token_of(&copy).as_deref(), Some("abc123"));
        copy.clear_token();
        assert_eq!(token_of(&client), None);
    }
}
