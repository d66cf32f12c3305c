//! User persistence for EcoTrack
//!
//! The credential store: the sole source of truth for identity.

mod service;

pub use service::{normalize_email, ProfilePatch, UserError, UserService};
