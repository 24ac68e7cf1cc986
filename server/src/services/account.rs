//! Account operations: register, login, and current-user lookups.
//!
//! ARCHITECTURE
//! ============
//! Each operation composes the user store, the credential hasher, and the
//! token codec, and reports failures through the single `AuthError`
//! taxonomy the HTTP layer maps onto status codes.
//!
//! TRADE-OFFS
//! ==========
//! Unknown email and wrong password both surface as `InvalidCredentials`.
//! This is deliberate anti-enumeration behavior; do not split the cases.

use sqlx::PgPool;

use identity::{AuthUser, UserProfile};

use super::token::TokenKeys;
use super::{password, token, user};

/// Minimum accepted password length at registration.
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid input")]
    InvalidInput,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("User already exists")]
    UserExists,
    #[error("Unauthorized")]
    Unauthorized,
    #[error("User not found")]
    NotFound,
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
    #[error("password hashing failed")]
    Hash,
    #[error("token signing failed: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

/// Validate a registration body: both fields present, password long enough.
pub fn validate_registration(email: &str, password: &str) -> Result<(), AuthError> {
    if email.is_empty() || password.is_empty() || password.len() < MIN_PASSWORD_LEN {
        return Err(AuthError::InvalidInput);
    }
    Ok(())
}

/// Validate a login body: both fields present.
pub fn validate_login(email: &str, password: &str) -> Result<(), AuthError> {
    if email.is_empty() || password.is_empty() {
        return Err(AuthError::InvalidInput);
    }
    Ok(())
}

/// Register a new account and issue a session token for it.
///
/// # Errors
///
/// `InvalidInput` on a bad body, `UserExists` on an email collision;
/// the response never says which field collided beyond "exists".
pub async fn register(
    pool: &PgPool,
    keys: &TokenKeys,
    email: &str,
    password: &str,
) -> Result<(AuthUser, String), AuthError> {
    validate_registration(email, password)?;

    if user::find_by_email(pool, email).await?.is_some() {
        return Err(AuthError::UserExists);
    }

    let password_hash = password::hash_password(password).map_err(|e| {
        tracing::error!(error = %e, "password hashing failed");
        AuthError::Hash
    })?;

    let new_user = user::insert(pool, email, &password_hash).await?;
    let session = token::sign(keys, &new_user)?;

    tracing::info!(user_id = new_user.id, "user registered");
    Ok((new_user, session))
}

/// Authenticate an existing account and issue a session token for it.
///
/// # Errors
///
/// `InvalidCredentials` for both unknown email and wrong password.
pub async fn login(
    pool: &PgPool,
    keys: &TokenKeys,
    email: &str,
    password: &str,
) -> Result<(AuthUser, String), AuthError> {
    validate_login(email, password)?;

    let Some(record) = user::find_by_email(pool, email).await? else {
        return Err(AuthError::InvalidCredentials);
    };

    if !password::verify_password(password, &record.password_hash) {
        return Err(AuthError::InvalidCredentials);
    }

    let authed = AuthUser { id: record.id, email: record.email };
    let session = token::sign(keys, &authed)?;

    tracing::info!(user_id = authed.id, "user logged in");
    Ok((authed, session))
}

/// Re-fetch the public identity behind a verified claim.
///
/// A still-valid token for a since-deleted user yields `NotFound`.
pub async fn current_user(pool: &PgPool, id: i64) -> Result<AuthUser, AuthError> {
    user::find_public(pool, id).await?.ok_or(AuthError::NotFound)
}

/// Fetch the full public profile behind a verified claim.
pub async fn profile(pool: &PgPool, id: i64) -> Result<UserProfile, AuthError> {
    user::find_profile(pool, id).await?.ok_or(AuthError::NotFound)
}

#[cfg(test)]
#[path = "account_test.rs"]
mod tests;
