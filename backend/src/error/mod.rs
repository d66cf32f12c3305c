//! Centralized API error handling for EcoTrack
//!
//! This module provides a unified error type for API responses with proper
//! HTTP status code mapping and the uniform JSON error envelope every
//! endpoint returns on failure.

use std::sync::atomic::{AtomicBool, Ordering};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use thiserror::Error;

/// Whether error responses carry diagnostic `details`. Enabled only for
/// non-production environments at startup; defaults to redacted.
static EXPOSE_DETAILS: AtomicBool = AtomicBool::new(false);

/// Toggle diagnostic details in error envelopes. Called once at startup.
pub fn expose_error_details(enabled: bool) {
    EXPOSE_DETAILS.store(enabled, Ordering::Relaxed);
}

/// API error type with HTTP status code mapping
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    MissingFields(String),

    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,

    #[error("User with this email already exists")]
    EmailTaken,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Access token required")]
    TokenMissing,

    #[error("Invalid or expired token")]
    TokenInvalid,

    #[error("Invalid token - user not found")]
    TokenUserNotFound,

    #[error("You can only update your own profile")]
    UnauthorizedUpdate,

    #[error("No valid fields to update")]
    NoUpdateFields,

    #[error("User not found")]
    UserNotFound,

    #[error("impact_points must be a positive number")]
    InvalidImpactPoints,

    #[error("Internal server error")]
    Internal(String),
}

/// Uniform JSON error envelope. Field names are part of the public API
/// contract and must not change.
#[derive(Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    pub timestamp: String,
}

impl ErrorBody {
    /// Build the envelope for an error, attaching diagnostic details only
    /// when detail exposure is enabled.
    fn new(message: String, error_code: &str, detail: Option<&str>) -> Self {
        let details = match detail {
            Some(d) if EXPOSE_DETAILS.load(Ordering::Relaxed) => {
                Some(serde_json::json!({ "message": d }))
            }
            _ => None,
        };

        Self {
            success: false,
            message,
            error_code: Some(error_code.to_string()),
            details,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

impl ApiError {
    /// Get the error code string
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::MissingFields(_) => "MISSING_REQUIRED_FIELDS",
            ApiError::PasswordTooShort => "PASSWORD_TOO_SHORT",
            ApiError::EmailTaken => "USER_ALREADY_EXISTS",
            ApiError::InvalidCredentials => "INVALID_CREDENTIALS",
            ApiError::TokenMissing => "AUTH_TOKEN_MISSING",
            ApiError::TokenInvalid => "AUTH_TOKEN_INVALID",
            ApiError::TokenUserNotFound => "AUTH_USER_NOT_FOUND",
            ApiError::UnauthorizedUpdate => "UNAUTHORIZED_UPDATE",
            ApiError::NoUpdateFields => "NO_UPDATE_FIELDS",
            ApiError::UserNotFound => "USER_NOT_FOUND",
            ApiError::InvalidImpactPoints => "INVALID_IMPACT_POINTS",
            ApiError::Internal(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    /// Get the HTTP status code
    ///
    /// The mapping reproduces the public API surface exactly: a duplicate
    /// email is a 400, a structurally invalid token is a 403, a missing
    /// token or a vanished token user is a 401.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingFields(_)
            | ApiError::PasswordTooShort
            | ApiError::EmailTaken
            | ApiError::NoUpdateFields
            | ApiError::InvalidImpactPoints => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials
            | ApiError::TokenMissing
            | ApiError::TokenUserNotFound => StatusCode::UNAUTHORIZED,
            ApiError::TokenInvalid | ApiError::UnauthorizedUpdate => StatusCode::FORBIDDEN,
            ApiError::UserNotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();
        let message = self.to_string();

        // Log server errors
        match &self {
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, code = %error_code, "Server error occurred");
            }
            _ => {
                tracing::debug!(error = %message, code = %error_code, "Client error occurred");
            }
        }

        let detail = match &self {
            ApiError::Internal(detail) => Some(detail.as_str()),
            _ => None,
        };

        let body = ErrorBody::new(message, error_code, detail);

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<crate::auth::AuthError> for ApiError {
    fn from(err: crate::auth::AuthError) -> Self {
        use crate::auth::AuthError;
        match err {
            AuthError::EmailTaken => ApiError::EmailTaken,
            AuthError::InvalidCredentials => ApiError::InvalidCredentials,
            AuthError::InvalidToken => ApiError::TokenInvalid,
            AuthError::UserNotFound => ApiError::TokenUserNotFound,
            AuthError::DatabaseError(msg)
            | AuthError::CredentialError(msg)
            | AuthError::TokenError(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<crate::users::UserError> for ApiError {
    fn from(err: crate::users::UserError) -> Self {
        use crate::users::UserError;
        match err {
            UserError::NotFound => ApiError::UserNotFound,
            UserError::EmailTaken => ApiError::EmailTaken,
            UserError::DatabaseError(msg) => ApiError::Internal(msg),
        }
    }
}

/// Result type alias using ApiError
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ApiError::TokenMissing.error_code(), "AUTH_TOKEN_MISSING");
        assert_eq!(ApiError::TokenInvalid.error_code(), "AUTH_TOKEN_INVALID");
        assert_eq!(
            ApiError::TokenUserNotFound.error_code(),
            "AUTH_USER_NOT_FOUND"
        );
        assert_eq!(ApiError::EmailTaken.error_code(), "USER_ALREADY_EXISTS");
        assert_eq!(
            ApiError::InvalidCredentials.error_code(),
            "INVALID_CREDENTIALS"
        );
        assert_eq!(
            ApiError::UnauthorizedUpdate.error_code(),
            "UNAUTHORIZED_UPDATE"
        );
        assert_eq!(
            ApiError::InvalidImpactPoints.error_code(),
            "INVALID_IMPACT_POINTS"
        );
    }

    #[test]
    fn test_status_codes() {
        // Duplicate email is a 400 on this API, not a 409.
        assert_eq!(ApiError::EmailTaken.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::TokenMissing.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::TokenInvalid.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            ApiError::TokenUserNotFound.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::UnauthorizedUpdate.status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(ApiError::UserNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Internal("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_envelope_field_names() {
        let body = ErrorBody::new(
            "User not found".to_string(),
            "USER_NOT_FOUND",
            Some("redacted detail"),
        );
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "User not found");
        assert_eq!(json["error_code"], "USER_NOT_FOUND");
        // Details stay redacted unless explicitly enabled.
        assert!(json.get("details").is_none());
        assert!(json["timestamp"].as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn test_login_failures_share_one_message() {
        // Unknown email and wrong password must be indistinguishable.
        assert_eq!(
            ApiError::InvalidCredentials.to_string(),
            "Invalid email or password"
        );
    }
}
