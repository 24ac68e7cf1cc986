//! Shared identity DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the JSON bodies of the auth API so serde round-trips
//! stay lossless on both sides, and carry the request-scoped identity the
//! server middleware attaches for SSR to read back without a network call.


use serde::{Deserialize, Serialize};

/// Public identity of an authenticated user.
///
/// This is the only identity shape that ever leaves the server; it must
/// never grow a credential-hash field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    /// Unique user identifier.
    pub id: i64,
    /// Login email address.
    pub email: String,
}

/// Full public profile returned by `GET /api/user/profile`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
    /// Creation timestamp, `YYYY-MM-DD HH24:MI:SS` in UTC.
    pub created_at: String,
    /// Last-update timestamp, `YYYY-MM-DD HH24:MI:SS` in UTC.
    pub updated_at: String,
}

/// Request body for `POST /api/auth/login` and `/api/auth/register`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// `{ "user": ... }` envelope wrapping identity responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEnvelope {
    pub user: AuthUser,
}

/// `{ "user": ... }` envelope wrapping the profile response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileEnvelope {
    pub user: UserProfile,
}

/// Request-scoped identity attached to every inbound request by the
/// server's auth middleware. `None` means the request is anonymous —
/// a missing cookie and an invalid token are indistinguishable here.
///
/// Lives in request extensions so SSR rendering can seed the client
/// session store from the already-verified claim.
#[derive(Clone, Debug, Default)]
pub struct RequestIdentity(pub Option<AuthUser>);
