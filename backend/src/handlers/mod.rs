//! API handlers for the EcoTrack backend

pub mod activities;
pub mod auth;
pub mod content;
pub mod users;

pub use activities::log_activity;
pub use auth::{login, register, verify_session};
pub use content::{
    create_challenge, get_challenge, get_dashboard, get_profile_summary, get_report,
    list_challenges, list_education, list_marketplace, submit_report,
};
pub use users::{get_user, update_user};

// Re-export AuthenticatedUser from middleware for handler use
pub use crate::middleware::AuthenticatedUser;
