//! JWT token generation and validation
//!
//! Handles creation and verification of session tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// JWT-related errors
#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Token encoding failed: {0}")]
    EncodingFailed(String),

    #[error("Token decoding failed: {0}")]
    DecodingFailed(String),

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),
}

/// Claims carried by a session token.
///
/// `email` is embedded alongside the user id but is never re-validated
/// against current database state; only `user_id` drives identity lookup.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Owning user ID
    pub user_id: String,
    /// Email at issuance time
    pub email: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration (Unix timestamp)
    pub exp: i64,
}

/// Issue a session token with a fixed absolute expiry.
///
/// # Arguments
/// * `user_id` - The authenticated user's identifier
/// * `email` - The user's email at issuance
/// * `secret` - JWT signing secret
/// * `ttl_days` - Token time-to-live in days
pub fn issue_token(
    user_id: Uuid,
    email: &str,
    secret: &str,
    ttl_days: i64,
) -> Result<String, JwtError> {
    issue_token_with_ttl(user_id, email, secret, ttl_days * 24 * 60 * 60)
}

fn issue_token_with_ttl(
    user_id: Uuid,
    email: &str,
    secret: &str,
    ttl_seconds: i64,
) -> Result<String, JwtError> {
    let now = Utc::now();
    let exp = now + Duration::seconds(ttl_seconds);

    let claims = Claims {
        user_id: user_id.to_string(),
        email: email.to_string(),
        iat: now.timestamp(),
        exp: exp.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| JwtError::EncodingFailed(e.to_string()))
}

/// Verify and decode a session token.
///
/// Verification is purely cryptographic and structural. Whether the user
/// still exists is the auth gateway's concern, not this function's.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, JwtError> {
    let validation = Validation::default();

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => JwtError::TokenExpired,
        _ => JwtError::DecodingFailed(e.to_string()),
    })?;

    Ok(token_data.claims)
}

/// Extract the user ID from claims
pub fn user_id_from_claims(claims: &Claims) -> Result<Uuid, JwtError> {
    Uuid::parse_str(&claims.user_id).map_err(|e| JwtError::InvalidToken(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_and_verify_round_trip() {
        let user_id = Uuid::new_v4();
        let secret = "test-secret-key";

        let token = issue_token(user_id, "a@x.com", secret, 7).unwrap();
        assert!(!token.is_empty());

        let claims = verify_token(&token, secret).unwrap();
        assert_eq!(claims.user_id, user_id.to_string());
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(user_id_from_claims(&claims).unwrap(), user_id);
    }

    #[test]
    fn test_seven_day_expiry_window() {
        let token = issue_token(Uuid::new_v4(), "a@x.com", "secret", 7).unwrap();
        let claims = verify_token(&token, "secret").unwrap();
        assert_eq!(claims.exp - claims.iat, 7 * 24 * 60 * 60);
    }

    #[test]
    fn test_expired_token_rejected() {
        let token =
            issue_token_with_ttl(Uuid::new_v4(), "a@x.com", "secret", -3600).unwrap();
        let result = verify_token(&token, "secret");
        assert!(matches!(result, Err(JwtError::TokenExpired)));
    }

    #[test]
    fn test_malformed_token_rejected() {
        let result = verify_token("invalid.token.here", "secret");
        assert!(matches!(result, Err(JwtError::DecodingFailed(_))));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = issue_token(Uuid::new_v4(), "a@x.com", "secret1", 7).unwrap();
        let result = verify_token(&token, "secret2");
        assert!(result.is_err());
    }
}
