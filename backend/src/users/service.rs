//! User store service
//!
//! All SQL touching the `users` table lives here. Emails are normalized
//! before every read or write so uniqueness is case- and
//! whitespace-insensitive; the table's UNIQUE constraint is the
//! authoritative duplicate guard.

use sqlx::{PgPool, QueryBuilder};
use thiserror::Error;
use uuid::Uuid;

use crate::models::User;

const USER_COLUMNS: &str = "id, email, password_hash, name, location, created_at, is_active";

/// User store errors
#[derive(Error, Debug)]
pub enum UserError {
    #[error("User not found")]
    NotFound,

    #[error("Email already registered")]
    EmailTaken,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<sqlx::Error> for UserError {
    fn from(e: sqlx::Error) -> Self {
        UserError::DatabaseError(e.to_string())
    }
}

/// Sparse patch of profile fields. Absent fields are left untouched.
#[derive(Debug, Default, Clone)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub location: Option<String>,
}

impl ProfilePatch {
    /// True when no updatable field was supplied.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.location.is_none()
    }
}

/// Normalize an email for storage and lookup: trim surrounding whitespace
/// and lowercase.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Persistent store of user records
#[derive(Clone)]
pub struct UserService {
    db_pool: PgPool,
}

impl UserService {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }

    /// Insert a new user. The email must already be normalized; a unique
    /// violation from the database maps to [`UserError::EmailTaken`], so
    /// two racing registrations cannot both succeed.
    pub async fn create(
        &self,
        email: &str,
        password_hash: &str,
        name: &str,
        location: &str,
    ) -> Result<User, UserError> {
        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (id, email, password_hash, name, location)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(email)
        .bind(password_hash)
        .bind(name)
        .bind(location)
        .fetch_one(&self.db_pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db)
                if matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation) =>
            {
                UserError::EmailTaken
            }
            _ => UserError::DatabaseError(e.to_string()),
        })?;

        Ok(user)
    }

    /// Look up a user by normalized email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.db_pool)
        .await?;

        Ok(user)
    }

    /// Look up a user by id.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, UserError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.db_pool)
        .await?;

        Ok(user)
    }

    /// Apply a sparse profile patch, updating only the supplied fields.
    ///
    /// Column names are fixed in code; only values are bound, so nothing
    /// from the request can reach the SQL text. Callers must reject an
    /// empty patch before calling (the built statement needs at least one
    /// assignment).
    pub async fn update(&self, id: Uuid, patch: &ProfilePatch) -> Result<User, UserError> {
        let mut builder = QueryBuilder::<sqlx::Postgres>::new("UPDATE users SET ");

        {
            let mut fields = builder.separated(", ");
            if let Some(name) = &patch.name {
                fields.push("name = ").push_bind_unseparated(name);
            }
            if let Some(location) = &patch.location {
                fields.push("location = ").push_bind_unseparated(location);
            }
        }

        builder.push(" WHERE id = ");
        builder.push_bind(id);
        builder.push(format!(" RETURNING {USER_COLUMNS}"));

        let user = builder
            .build_query_as::<User>()
            .fetch_optional(&self.db_pool)
            .await?
            .ok_or(UserError::NotFound)?;

        Ok(user)
    }
}
