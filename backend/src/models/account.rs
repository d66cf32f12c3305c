//! Account request/response DTOs
//!
//! Request fields are `Option` so a missing JSON key reaches the handler's
//! own validation (400 `MISSING_REQUIRED_FIELDS`) instead of a framework
//! rejection.

use serde::{Deserialize, Serialize};

use super::UserProfile;

/// Body of `POST /api/users` and `POST /api/auth/signup`
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub location: Option<String>,
}

/// Registration response: flat user projection plus the session token
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    #[serde(flatten)]
    pub user: UserProfile,
    pub auth_token: String,
}

/// Body of `POST /api/auth/login`
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub current_user: UserProfile,
    pub auth_token: String,
}

/// Response of `GET /api/auth/verify`
#[derive(Debug, Serialize)]
pub struct VerifySessionResponse {
    pub user: UserProfile,
}

/// Body of `PATCH /api/users/:user_id`
///
/// `eco_goals` is accepted and echoed back but not persisted; it is
/// collaborator surface, not an updatable column.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub location: Option<String>,
    pub eco_goals: Option<Vec<String>>,
}
