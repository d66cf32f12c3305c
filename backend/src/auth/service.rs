//! Authentication service
//!
//! Core business logic for account registration, login, and session
//! authentication. Composes the user store with token issuance; the HTTP
//! layer stays thin.

use thiserror::Error;
use uuid::Uuid;

use crate::models::User;
use crate::users::{normalize_email, UserError, UserService};

use super::jwt::{issue_token, user_id_from_claims, verify_token, JwtError};
use super::password::{hash_password, verify_password, PasswordError};

/// Auth service errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User with this email already exists")]
    EmailTaken,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Token user no longer exists")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Credential error: {0}")]
    CredentialError(String),

    #[error("Token error: {0}")]
    TokenError(String),
}

impl From<UserError> for AuthError {
    fn from(e: UserError) -> Self {
        match e {
            UserError::EmailTaken => AuthError::EmailTaken,
            UserError::NotFound => AuthError::UserNotFound,
            UserError::DatabaseError(msg) => AuthError::DatabaseError(msg),
        }
    }
}

impl From<PasswordError> for AuthError {
    fn from(e: PasswordError) -> Self {
        AuthError::CredentialError(e.to_string())
    }
}

impl From<JwtError> for AuthError {
    fn from(e: JwtError) -> Self {
        AuthError::TokenError(e.to_string())
    }
}

/// Authentication service
#[derive(Clone)]
pub struct AuthService {
    users: UserService,
    jwt_secret: String,
    token_ttl_days: i64,
}

impl AuthService {
    /// Create a new AuthService
    pub fn new(users: UserService, jwt_secret: String, token_ttl_days: i64) -> Self {
        Self {
            users,
            jwt_secret,
            token_ttl_days,
        }
    }

    /// Register a new account and issue its first session token.
    ///
    /// The duplicate pre-check keeps the common path friendly; the unique
    /// constraint in the store closes the race when two registrations for
    /// the same email interleave.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
        location: &str,
    ) -> Result<(User, String), AuthError> {
        let email = normalize_email(email);

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailTaken);
        }

        let password_hash = hash_password(password)?;
        let user = self
            .users
            .create(&email, &password_hash, name, location)
            .await?;

        let token = issue_token(user.id, &user.email, &self.jwt_secret, self.token_ttl_days)?;

        tracing::info!(user_id = %user.id, "User registered");

        Ok((user, token))
    }

    /// Authenticate credentials and issue a session token.
    ///
    /// Unknown email and wrong password are indistinguishable to the
    /// caller: both surface as [`AuthError::InvalidCredentials`].
    pub async fn login(&self, email: &str, password: &str) -> Result<(User, String), AuthError> {
        let email = normalize_email(email);

        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        let token = issue_token(user.id, &user.email, &self.jwt_secret, self.token_ttl_days)?;

        tracing::debug!(user_id = %user.id, "User logged in");

        Ok((user, token))
    }

    /// Resolve a bearer token to its current user record.
    ///
    /// The token is verified cryptographically, then the user row is
    /// re-read — a valid signature over a vanished user is still rejected.
    pub async fn authenticate(&self, token: &str) -> Result<User, AuthError> {
        let claims = verify_token(token, &self.jwt_secret).map_err(|_| AuthError::InvalidToken)?;
        let user_id = user_id_from_claims(&claims).map_err(|_| AuthError::InvalidToken)?;

        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)
    }

    /// Fetch a user by id for the profile endpoints.
    pub async fn get_user(&self, id: Uuid) -> Result<Option<User>, AuthError> {
        Ok(self.users.find_by_id(id).await?)
    }
}
