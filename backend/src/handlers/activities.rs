//! Activity logging HTTP handler
//!
//! Collaborator surface: the activity is validated and echoed back with a
//! generated id and timestamp, but nothing is persisted.

use axum::{http::StatusCode, Json};
use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::AuthenticatedUser;
use crate::models::{ActivityResponse, LogActivityRequest};

/// POST /api/activities - Record an eco-action
pub async fn log_activity(
    _auth: AuthenticatedUser,
    Json(req): Json<LogActivityRequest>,
) -> Result<(StatusCode, Json<ActivityResponse>), ApiError> {
    let (user_id, action_type, impact_points) =
        match (req.user_id, req.action_type, req.impact_points) {
            (Some(user_id), Some(action_type), Some(points)) => (user_id, action_type, points),
            _ => {
                return Err(ApiError::MissingFields(
                    "user_id, action_type, and impact_points are required".to_string(),
                ))
            }
        };

    if impact_points < 0.0 {
        return Err(ApiError::InvalidImpactPoints);
    }

    Ok((
        StatusCode::CREATED,
        Json(ActivityResponse {
            id: Uuid::new_v4(),
            user_id,
            action_type,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            impact_points,
        }),
    ))
}
