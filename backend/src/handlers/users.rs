//! User profile HTTP handlers

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::AuthenticatedUser;
use crate::models::{UpdateProfileRequest, UserProfile};
use crate::state::AppState;
use crate::users::ProfilePatch;

/// GET /api/users/:user_id - Fetch a user profile
pub async fn get_user(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Path(user_id): Path<String>,
) -> Result<Json<UserProfile>, ApiError> {
    // A malformed id cannot match any row; treat it as absent.
    let user_id = Uuid::parse_str(&user_id).map_err(|_| ApiError::UserNotFound)?;

    let user = state
        .auth_service
        .get_user(user_id)
        .await?
        .ok_or(ApiError::UserNotFound)?;

    Ok(Json(UserProfile::from(user)))
}

/// PATCH /api/users/:user_id - Partially update the caller's own profile
///
/// Only the authenticated owner may update; the patch applies exactly the
/// supplied fields. `eco_goals` is echoed back but not persisted.
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthenticatedUser,
    Path(user_id): Path<String>,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<UserProfile>, ApiError> {
    let user_id = Uuid::parse_str(&user_id).map_err(|_| ApiError::UserNotFound)?;

    if auth.user.id != user_id {
        return Err(ApiError::UnauthorizedUpdate);
    }

    let patch = ProfilePatch {
        name: req.name,
        location: req.location,
    };

    if patch.is_empty() {
        return Err(ApiError::NoUpdateFields);
    }

    let user = state.user_service.update(user_id, &patch).await?;

    let mut profile = UserProfile::from(user);
    profile.eco_goals = req.eco_goals.unwrap_or_default();

    Ok(Json(profile))
}
