//! Password hashing with Argon2

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use thiserror::Error;

use kominfo_shared::constants::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("Hash error: {0}")]
    HashError(String),
    #[error("Password must be between {min} and {max} characters")]
    InvalidLength { min: usize, max: usize },
}

pub struct PasswordService;

impl PasswordService {
    pub fn hash(password: &str) -> Result<String, PasswordError> {
        Self::check_length(password)?;
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| PasswordError::HashError(e.to_string()))
    }

    /// `Ok(false)` for a wrong password, `Err` only for an unreadable hash.
    pub fn verify(password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash = PasswordHash::new(hash).map_err(|e| PasswordError::HashError(e.to_string()))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    fn check_length(password: &str) -> Result<(), PasswordError> {
        let len = password.chars().count();
        if (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&len) {
            Ok(())
        } else {
            Err(PasswordError::InvalidLength { min: MIN_PASSWORD_LENGTH, max: MAX_PASSWORD_LENGTH })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = PasswordService::hash("rahasia-kominfo").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(PasswordService::verify("rahasia-kominfo", &hash).unwrap());
        assert!(!PasswordService::verify("salah", &hash).unwrap());
    }

    #[test]
    fn test_short_password_is_rejected() {
        assert!(matches!(
            PasswordService::hash("pendek"),
            Err(PasswordError::InvalidLength { .. })
        ));
    }

    #[test]
    fn test_garbage_hash_is_an_error() {
        assert!(PasswordService::verify("x", "not-a-hash").is_err());
    }
}
