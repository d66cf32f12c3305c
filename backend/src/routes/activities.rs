//! Activity route definitions

use axum::{routing::post, Router};

use crate::handlers::activities;
use crate::state::AppState;

pub fn activity_routes() -> Router<AppState> {
    Router::new().route("/api/activities", post(activities::log_activity))
}
