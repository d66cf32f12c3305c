//! Application state shared across handlers

use std::sync::Arc;

use axum::extract::FromRef;

use crate::auth::AuthService;
use crate::users::UserService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub user_service: Arc<UserService>,
}

impl AppState {
    pub fn new(auth_service: Arc<AuthService>, user_service: Arc<UserService>) -> Self {
        Self {
            auth_service,
            user_service,
        }
    }
}

impl FromRef<AppState> for Arc<AuthService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth_service.clone()
    }
}

impl FromRef<AppState> for Arc<UserService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.user_service.clone()
    }
}
