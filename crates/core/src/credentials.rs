//! Argon2id credential derivation for seeded demo accounts.
//!
//! Every stored hash uses its own random salt from [`OsRng`] and is kept in
//! PHC string format, so algorithm parameters and salt travel with the hash.
//! Derivation with an explicit salt is deterministic and exposed for callers
//! that need reproducible output.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::error::CoreError;

/// Hash a plaintext password with a freshly generated salt.
pub fn hash_password(password: &str) -> Result<String, CoreError> {
    let salt = SaltString::generate(&mut OsRng);
    derive_with_salt(password, &salt)
}

/// Derive the PHC hash string for `password` under a caller-supplied salt.
pub fn derive_with_salt(password: &str, salt: &SaltString) -> Result<String, CoreError> {
    Argon2::default()
        .hash_password(password.as_bytes(), salt)
        .map(|hash| hash.to_string())
        .map_err(|e| CoreError::Credential(e.to_string()))
}

/// Verify a plaintext password against a stored PHC hash.
///
/// Returns `Ok(false)` on mismatch; malformed hashes are errors.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, CoreError> {
    let parsed = PasswordHash::new(hash).map_err(|e| CoreError::Credential(e.to_string()))?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(CoreError::Credential(e.to_string())),
    }
}
