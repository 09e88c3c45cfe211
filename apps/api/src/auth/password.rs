use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};

use crate::errors::AppError;

/// Hashes a password with Argon2id and a random salt.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Verifies a password against a stored PHC-format hash.
/// An unparseable stored hash verifies as false rather than erroring.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify_round_trip() {
        let hash = hash_password("correct horse battery staple").unwrap();
        assert!(verify_password("correct horse battery staple", &hash));
    }

    #[test]
    fn test_wrong_password_fails_verification() {
        let hash = hash_password("correct horse battery staple").unwrap();
        assert!(!verify_password("Tr0ub4dor&3", &hash));
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("same input").unwrap();
        let second = hash_password("same input").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_garbage_stored_hash_verifies_false() {
        assert!(!verify_password("anything", "not-a-phc-hash"));
    }
}
