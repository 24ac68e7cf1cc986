//! User store queries.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only place that touches the `users` table. `UserRecord` (with the
//! credential hash) never leaves the service layer; handlers only see the
//! public `AuthUser`/`UserProfile` shapes.

use sqlx::{PgPool, Row};

use identity::{AuthUser, UserProfile};

/// Private user row, including the credential hash.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
}

/// Look up a user by email, returning the private record.
pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<UserRecord>, sqlx::Error> {
    let row = sqlx::query("SELECT id, email, password_hash FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|r| UserRecord {
        id: r.get("id"),
        email: r.get("email"),
        password_hash: r.get("password_hash"),
    }))
}

/// Look up a user's public identity by id.
pub async fn find_public(pool: &PgPool, id: i64) -> Result<Option<AuthUser>, sqlx::Error> {
    let row = sqlx::query("SELECT id, email FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|r| AuthUser { id: r.get("id"), email: r.get("email") }))
}

/// Look up a user's full public profile by id.
pub async fn find_profile(pool: &PgPool, id: i64) -> Result<Option<UserProfile>, sqlx::Error> {
    let row = sqlx::query(
        r"SELECT id, email,
                 to_char(created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD HH24:MI:SS') AS created_at,
                 to_char(updated_at AT TIME ZONE 'UTC', 'YYYY-MM-DD HH24:MI:SS') AS updated_at
          FROM users WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| UserProfile {
        id: r.get("id"),
        email: r.get("email"),
        created_at: r.get("created_at"),
        updated_at: r.get("updated_at"),
    }))
}

/// Insert a new user, returning the public identity.
pub async fn insert(pool: &PgPool, email: &str, password_hash: &str) -> Result<AuthUser, sqlx::Error> {
    let row = sqlx::query(
        r"INSERT INTO users (email, password_hash)
          VALUES ($1, $2)
          RETURNING id, email",
    )
    .bind(email)
    .bind(password_hash)
    .fetch_one(pool)
    .await?;

    Ok(AuthUser { id: row.get("id"), email: row.get("email") })
}
