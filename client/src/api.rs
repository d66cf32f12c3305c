//! Typed client for the EcoTrack HTTP API
//!
//! Thin wrapper over `reqwest` that attaches bearer tokens, applies an
//! explicit request timeout, and decodes the server's uniform error
//! envelope into a typed error carrying the user-facing message.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::session::SessionUser;

/// Outbound requests time out rather than hanging on a stalled server.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client-side API errors
#[derive(Error, Debug)]
pub enum ApiClientError {
    /// The server answered with its uniform error envelope.
    #[error("{message}")]
    Api {
        status: u16,
        error_code: Option<String>,
        message: String,
    },

    /// The request never completed (connection, timeout, TLS).
    #[error("Request failed: {0}")]
    Transport(String),

    /// The response body did not match the expected shape.
    #[error("Unexpected response body: {0}")]
    UnexpectedBody(String),
}

impl From<reqwest::Error> for ApiClientError {
    fn from(e: reqwest::Error) -> Self {
        ApiClientError::Transport(e.to_string())
    }
}

/// The server's uniform error envelope, as much of it as clients consume.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[allow(dead_code)]
    success: bool,
    message: String,
    error_code: Option<String>,
}

/// Body of a registration call
#[derive(Debug, Serialize)]
pub struct RegisterPayload {
    pub email: String,
    pub password: String,
    pub name: String,
    pub location: String,
}

/// Registration response (flat profile + token; extra fields ignored)
#[derive(Debug, Deserialize)]
pub struct RegisterResult {
    pub id: Uuid,
    pub email: String,
    pub auth_token: String,
}

/// Login response
#[derive(Debug, Deserialize)]
pub struct LoginResult {
    pub current_user: SessionUser,
    pub auth_token: String,
}

#[derive(Debug, Deserialize)]
struct VerifyResult {
    user: SessionUser,
}

/// Sparse profile update
#[derive(Debug, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Typed EcoTrack API client
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given API origin (e.g. `http://localhost:3000`).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiClientError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST /api/users
    pub async fn register(&self, payload: &RegisterPayload) -> Result<RegisterResult, ApiClientError> {
        let response = self
            .http
            .post(self.url("/api/users"))
            .json(payload)
            .send()
            .await?;

        decode(response).await
    }

    /// POST /api/auth/login
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResult, ApiClientError> {
        let response = self
            .http
            .post(self.url("/api/auth/login"))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;

        decode(response).await
    }

    /// GET /api/auth/verify
    pub async fn verify_session(&self, token: &str) -> Result<SessionUser, ApiClientError> {
        let response = self
            .http
            .get(self.url("/api/auth/verify"))
            .bearer_auth(token)
            .send()
            .await?;

        let result: VerifyResult = decode(response).await?;
        Ok(result.user)
    }

    /// GET /api/users/:user_id
    pub async fn fetch_user(
        &self,
        token: &str,
        user_id: Uuid,
    ) -> Result<SessionUser, ApiClientError> {
        let response = self
            .http
            .get(self.url(&format!("/api/users/{}", user_id)))
            .bearer_auth(token)
            .send()
            .await?;

        decode(response).await
    }

    /// PATCH /api/users/:user_id
    pub async fn update_profile(
        &self,
        token: &str,
        user_id: Uuid,
        update: &ProfileUpdate,
    ) -> Result<SessionUser, ApiClientError> {
        let response = self
            .http
            .patch(self.url(&format!("/api/users/{}", user_id)))
            .bearer_auth(token)
            .json(update)
            .send()
            .await?;

        decode(response).await
    }

    /// POST /api/activities
    pub async fn log_activity(
        &self,
        token: &str,
        user_id: Uuid,
        action_type: &str,
        impact_points: f64,
    ) -> Result<serde_json::Value, ApiClientError> {
        let response = self
            .http
            .post(self.url("/api/activities"))
            .bearer_auth(token)
            .json(&serde_json::json!({
                "user_id": user_id.to_string(),
                "action_type": action_type,
                "impact_points": impact_points,
            }))
            .send()
            .await?;

        decode(response).await
    }
}

/// Decode a success body, or surface the server's error envelope.
async fn decode<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ApiClientError> {
    let status = response.status();

    if status.is_success() {
        let body = response.text().await?;
        return serde_json::from_str(&body)
            .map_err(|e| ApiClientError::UnexpectedBody(e.to_string()));
    }

    let body = response.text().await?;
    match serde_json::from_str::<ErrorEnvelope>(&body) {
        Ok(envelope) => Err(ApiClientError::Api {
            status: status.as_u16(),
            error_code: envelope.error_code,
            message: envelope.message,
        }),
        Err(_) => Err(ApiClientError::Api {
            status: status.as_u16(),
            error_code: None,
            message: format!("Request failed with status {}", status.as_u16()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_stripped() {
        let client = ApiClient::new("http://localhost:3000/").unwrap();
        assert_eq!(client.url("/api/health"), "http://localhost:3000/api/health");
    }

    #[test]
    fn test_api_error_displays_server_message() {
        let err = ApiClientError::Api {
            status: 401,
            error_code: Some("INVALID_CREDENTIALS".to_string()),
            message: "Invalid email or password".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid email or password");
    }

    #[test]
    fn test_profile_update_skips_absent_fields() {
        let update = ProfileUpdate {
            name: None,
            location: Some("LA".to_string()),
        };
        let json = serde_json::to_value(&update).unwrap();
        assert!(json.get("name").is_none());
        assert_eq!(json["location"], "LA");
    }
}
