//! Credential digest handling
//!
//! Secrets are stored as salted one-way bcrypt digests; verification
//! recomputes and compares digests in constant time. The stored form is
//! never reversible and never transmitted.

use bcrypt::{hash, verify, DEFAULT_COST};
use thiserror::Error;

/// Errors from hashing or verifying a credential
#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("Failed to hash password: {0}")]
    HashFailed(String),

    #[error("Failed to verify password: {0}")]
    VerifyFailed(String),
}

/// Hash a plaintext secret for storage.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    hash(password, DEFAULT_COST).map_err(|e| PasswordError::HashFailed(e.to_string()))
}

/// Check a claimed secret against a stored digest.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, PasswordError> {
    verify(password, password_hash).map_err(|e| PasswordError::VerifyFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_not_plaintext() {
        let digest = hash_password("secret1").unwrap();
        assert_ne!(digest, "secret1");
        assert!(digest.starts_with("$2"));
    }

    #[test]
    fn test_verify_accepts_correct_password() {
        let digest = hash_password("secret1").unwrap();
        assert!(verify_password("secret1", &digest).unwrap());
    }

    #[test]
    fn test_verify_rejects_wrong_password() {
        let digest = hash_password("secret1").unwrap();
        assert!(!verify_password("secret2", &digest).unwrap());
    }

    #[test]
    fn test_verify_errors_on_malformed_digest() {
        assert!(verify_password("secret1", "not-a-digest").is_err());
    }
}
