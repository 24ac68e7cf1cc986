//! Credential hashing.
//!
//! Argon2id with per-password random salts, stored as PHC strings so the
//! parameters travel with the hash.

use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use password_hash::{PasswordHash, SaltString};
use rand::Rng;

/// Hash a password into a PHC-format string.
///
/// # Errors
///
/// Returns an error if salt encoding or hashing fails.
pub fn hash_password(password: &str) -> Result<String, password_hash::Error> {
    let salt_bytes: [u8; 16] = rand::rng().random();
    let salt = SaltString::encode_b64(&salt_bytes)?;
    let phc = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(phc.to_string())
}

/// Verify a password against a stored PHC hash.
///
/// An unparseable stored hash counts as a mismatch rather than an error,
/// so corrupt rows degrade to failed logins instead of 500s.
#[must_use]
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored) else {
        return false;
    };
    Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok()
}

#[cfg(test)]
#[path = "password_test.rs"]
mod tests;
