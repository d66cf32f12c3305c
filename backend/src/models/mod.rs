//! Data models for EcoTrack backend

use serde::{Deserialize, Serialize};
use sqlx::types::chrono::{DateTime, Utc};
use uuid::Uuid;

pub mod account;
pub mod content;

pub use account::*;
pub use content::*;

/// User model as stored in the database.
///
/// The credential digest never leaves this type: `password_hash` is
/// excluded from serialization so no projection can leak it.
#[derive(Debug, Deserialize, sqlx::FromRow, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub name: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

/// User projection returned by the API.
///
/// `eco_goals`, `achievements`, `challenges` and `reports` are
/// collaborator placeholders: no subsystem populates them, they are fixed
/// empty collections in every response.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserProfile {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
    pub name: String,
    pub location: String,
    pub eco_goals: Vec<String>,
    pub impact_score: i64,
    pub achievements: Vec<String>,
    pub challenges: Vec<String>,
    pub reports: Vec<String>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            created_at: user.created_at,
            is_active: user.is_active,
            name: user.name.unwrap_or_default(),
            location: user.location.unwrap_or_default(),
            eco_goals: Vec::new(),
            impact_score: 0,
            achievements: Vec::new(),
            challenges: Vec::new(),
            reports: Vec::new(),
        }
    }
}
