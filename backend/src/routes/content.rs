//! Mock content route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::content;
use crate::state::AppState;

pub fn content_routes() -> Router<AppState> {
    Router::new()
        .route("/api/challenges", get(content::list_challenges))
        .route("/api/challenges", post(content::create_challenge))
        .route("/api/challenges/:challenge_id", get(content::get_challenge))
        .route("/api/education", get(content::list_education))
        .route("/api/marketplace", get(content::list_marketplace))
        .route("/api/issue-reports", post(content::submit_report))
        .route("/api/issue-reports/:report_id", get(content::get_report))
        .route("/api/dashboard", get(content::get_dashboard))
        .route("/api/profile", get(content::get_profile_summary))
}
