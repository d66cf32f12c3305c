//! User route definitions

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::handlers::{auth, users};
use crate::state::AppState;

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/api/users", post(auth::register))
        .route("/api/users/:user_id", get(users::get_user))
        .route("/api/users/:user_id", patch(users::update_user))
}
