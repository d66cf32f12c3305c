//! Authentication middleware
//!
//! The auth gateway: extracts the bearer token, verifies it, re-reads the
//! user row, and attaches the loaded record to the request. Every
//! protected request performs exactly one store read; identity is never
//! cached between requests.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use std::sync::Arc;

use crate::auth::{AuthError, AuthService};
use crate::error::ApiError;
use crate::models::User;

/// Authenticated user loaded from the credential store
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
}

/// Extractor for authenticated users
///
/// Rejection mapping mirrors the public API surface:
/// - no bearer token → 401 `AUTH_TOKEN_MISSING`
/// - token fails verification → 403 `AUTH_TOKEN_INVALID`
/// - token valid but the user row is gone → 401 `AUTH_USER_NOT_FOUND`
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(auth: AuthenticatedUser) -> impl IntoResponse {
///     format!("Hello, {}", auth.user.email)
/// }
/// ```
#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    Arc<AuthService>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::TokenMissing.into_response())?;

        let auth_service = Arc::<AuthService>::from_ref(state);

        let user = auth_service
            .authenticate(bearer.token())
            .await
            .map_err(|e| match e {
                AuthError::InvalidToken => ApiError::TokenInvalid.into_response(),
                AuthError::UserNotFound => ApiError::TokenUserNotFound.into_response(),
                other => ApiError::Internal(other.to_string()).into_response(),
            })?;

        Ok(AuthenticatedUser { user })
    }
}
