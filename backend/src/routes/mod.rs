//! Route definitions for the EcoTrack API

mod activities;
mod auth;
mod content;
mod users;

pub use activities::activity_routes;
pub use auth::auth_routes;
pub use content::content_routes;
pub use users::user_routes;
