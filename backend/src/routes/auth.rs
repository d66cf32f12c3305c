//! Authentication routes

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::auth;
use crate::state::AppState;

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        // Signup is an alias for registration.
        .route("/api/auth/signup", post(auth::register))
        .route("/api/auth/verify", get(auth::verify_session))
}
