//! Account and session HTTP handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::error::ApiError;
use crate::middleware::AuthenticatedUser;
use crate::models::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UserProfile,
    VerifySessionResponse,
};
use crate::state::AppState;

/// POST /api/users (also mounted at /api/auth/signup) - Register a new account
///
/// Validation short-circuits before any store access; the duplicate check
/// costs one read, the insert is guarded by the unique constraint.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let (email, password, name, location) = match (req.email, req.password, req.name, req.location)
    {
        (Some(email), Some(password), Some(name), Some(location)) => {
            (email, password, name, location)
        }
        _ => {
            return Err(ApiError::MissingFields(
                "All fields (email, password, name, location) are required".to_string(),
            ))
        }
    };

    if password.len() < 6 {
        return Err(ApiError::PasswordTooShort);
    }

    let (user, token) = state
        .auth_service
        .register(&email, &password, &name, &location)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            user: UserProfile::from(user),
            auth_token: token,
        }),
    ))
}

/// POST /api/auth/login - Authenticate and issue a session token
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let (email, password) = match (req.email, req.password) {
        (Some(email), Some(password)) => (email, password),
        _ => {
            return Err(ApiError::MissingFields(
                "Email and password are required".to_string(),
            ))
        }
    };

    let (user, token) = state.auth_service.login(&email, &password).await?;

    Ok(Json(LoginResponse {
        current_user: UserProfile::from(user),
        auth_token: token,
    }))
}

/// GET /api/auth/verify - Re-validate the current session
///
/// The gateway already resolved token to user; this just projects it back
/// so a client can rehydrate its session state.
pub async fn verify_session(auth: AuthenticatedUser) -> Json<VerifySessionResponse> {
    Json(VerifySessionResponse {
        user: UserProfile::from(auth.user),
    })
}
