//! Session token codec.
//!
//! ARCHITECTURE
//! ============
//! Sessions are stateless HS256 JWTs carrying the minimal public claim set
//! `{id, email, exp}`. There is no server-side session table and no
//! revocation list; a token stays valid until expiry even after logout.
//!
//! TRADE-OFFS
//! ==========
//! `verify` collapses malformed encoding, signature mismatch, and expiry
//! into a single `None`. Callers cannot learn why a token failed, which
//! keeps the codec from becoming a validity oracle.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use identity::AuthUser;

/// Session validity window: 7 days, matching the cookie max-age.
pub const SESSION_TTL_SECS: i64 = 60 * 60 * 24 * 7;

/// Claim set embedded in a session token. Never contains the
/// credential hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub id: i64,
    pub email: String,
    /// Expiration instant, seconds since the Unix epoch.
    pub exp: i64,
}

impl Claims {
    /// Public identity carried by these claims.
    #[must_use]
    pub fn user(&self) -> AuthUser {
        AuthUser { id: self.id, email: self.email.clone() }
    }
}

/// Process-wide signing keys derived from the shared secret at startup.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenKeys {
    #[must_use]
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }

    /// Load the signing secret from `JWT_SECRET`.
    /// Returns `None` if it is missing or empty (fatal at startup).
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let secret = std::env::var("JWT_SECRET").ok()?;
        if secret.trim().is_empty() {
            return None;
        }
        Some(Self::new(secret.as_bytes()))
    }
}

fn now_unix() -> i64 {
    time::OffsetDateTime::now_utc().unix_timestamp()
}

fn encode_claims(keys: &TokenKeys, claims: &Claims) -> Result<String, jsonwebtoken::errors::Error> {
    jsonwebtoken::encode(&Header::default(), claims, &keys.encoding)
}

/// Sign a session token for `user`, valid for [`SESSION_TTL_SECS`].
///
/// # Errors
///
/// Fails only if encoding itself fails; a missing secret is rejected
/// earlier, at startup.
pub fn sign(keys: &TokenKeys, user: &AuthUser) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims { id: user.id, email: user.email.clone(), exp: now_unix() + SESSION_TTL_SECS };
    encode_claims(keys, &claims)
}

/// Verify a session token, returning its claims when the signature checks
/// out and the expiry is still in the future.
///
/// All failure causes are indistinguishable: the caller sees `None`.
#[must_use]
pub fn verify(keys: &TokenKeys, token: &str) -> Option<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation.set_required_spec_claims(&["exp"]);

    match jsonwebtoken::decode::<Claims>(token, &keys.decoding, &validation) {
        Ok(data) => Some(data.claims),
        Err(e) => {
            tracing::debug!(error = %e, "session token rejected");
            None
        }
    }
}

#[cfg(test)]
#[path = "token_test.rs"]
mod tests;
