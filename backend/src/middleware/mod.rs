//! Middleware for the EcoTrack API
//!
//! Request tracing and the authentication gateway.

pub mod auth;
mod tracing;

pub use auth::AuthenticatedUser;
pub use tracing::request_tracing;
