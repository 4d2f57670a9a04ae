//! Password hashing and verification utilities
//!
//! Uses Argon2id for password hashing.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use reddit_core::DomainError;

use crate::error::AppError;

/// Hash a password using Argon2id
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Verify a password against a stored hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Reject passwords shorter than the identity provider minimum
pub fn validate_password_strength(password: &str, min_len: usize) -> Result<(), DomainError> {
    if password.chars().count() < min_len {
        return Err(DomainError::WeakPassword { min: min_len });
    }
    Ok(())
}

/// Password service for dependency injection
#[derive(Debug, Clone)]
pub struct PasswordService {
    min_len: usize,
}

impl PasswordService {
    #[must_use]
    pub fn new(min_len: usize) -> Self {
        Self { min_len }
    }

    /// Check strength, then hash
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        validate_password_strength(password, self.min_len)?;
        hash_password(password)
    }

    /// Verify a password and return an error if it does not match
    pub fn verify_or_error(&self, password: &str, hash: &str) -> Result<(), AppError> {
        if verify_password(password, hash)? {
            Ok(())
        } else {
            Err(AppError::Domain(DomainError::WrongPassword))
        }
    }
}

impl Default for PasswordService {
    fn default() -> Self {
        Self::new(6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password() {
        let hash = hash_password("hunter22").unwrap();

        assert!(hash.starts_with("$argon2"));
        // Different salt every time
        assert_ne!(hash, hash_password("hunter22").unwrap());
    }

    #[test]
    fn test_verify_password() {
        let hash = hash_password("hunter22").unwrap();
        assert!(verify_password("hunter22", &hash).unwrap());
        assert!(!verify_password("hunter23", &hash).unwrap());
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        assert!(matches!(
            verify_password("x", "not-a-hash"),
            Err(AppError::Internal(_))
        ));
    }

    #[test]
    fn test_password_strength() {
        assert!(validate_password_strength("123456", 6).is_ok());
        assert_eq!(
            validate_password_strength("12345", 6),
            Err(DomainError::WeakPassword { min: 6 })
        );
    }

    #[test]
    fn test_service_rejects_weak_password() {
        let service = PasswordService::default();
        let err = service.hash("abc").unwrap_err();
        assert!(matches!(err, AppError::Domain(DomainError::WeakPassword { min: 6 })));
    }

    #[test]
    fn test_verify_or_error() {
        let service = PasswordService::default();
        let hash = service.hash("correct horse").unwrap();

        assert!(service.verify_or_error("correct horse", &hash).is_ok());
        assert!(matches!(
            service.verify_or_error("wrong", &hash),
            Err(AppError::Domain(DomainError::WrongPassword))
        ));
    }
}
