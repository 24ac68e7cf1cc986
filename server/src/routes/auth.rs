//! Auth routes — session cookie transport, request-identity middleware,
//! and the login/register/logout/me handlers.

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use identity::{Credentials, RequestIdentity, UserEnvelope};

use crate::services::account::{self, AuthError};
use crate::services::token::{self, SESSION_TTL_SECS};
use crate::state::AppState;

const COOKIE_NAME: &str = "auth_token";

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

/// `Secure` cookie policy: explicit `COOKIE_SECURE` wins, otherwise
/// inferred from whether the public origin is served over https.
pub(crate) fn cookie_secure() -> bool {
    if let Some(value) = env_bool("COOKIE_SECURE") {
        return value;
    }

    std::env::var("PUBLIC_ORIGIN")
        .map(|origin| origin.starts_with("https://"))
        .unwrap_or(false)
}

// =============================================================================
// COOKIE TRANSPORT
// =============================================================================

/// Session cookie with the fixed attribute set: HttpOnly, SameSite=Strict,
/// Path=/, Max-Age matching the token validity window.
fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .secure(cookie_secure())
        .max_age(Duration::seconds(SESSION_TTL_SECS))
        .build()
}

/// Immediately-expiring session cookie, used by logout.
fn clear_session_cookie() -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .secure(cookie_secure())
        .max_age(Duration::ZERO)
        .build()
}

// =============================================================================
// REQUEST-IDENTITY MIDDLEWARE
// =============================================================================

/// Runs on every inbound request, before any handler: decode the session
/// cookie, verify the token, and attach the resulting identity (or its
/// absence) to the request extensions.
///
/// Never fails the request. A missing cookie and an invalid token are
/// indistinguishable downstream; the cookie is never cleared here.
pub async fn populate_identity(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let jar = CookieJar::from_headers(req.headers());
    let identity = jar
        .get(COOKIE_NAME)
        .map(Cookie::value)
        .and_then(|raw| token::verify(&state.keys, raw))
        .map(|claims| claims.user());

    req.extensions_mut().insert(RequestIdentity(identity));
    next.run(req).await
}

/// Verified identity extracted from the request context.
/// Use as a handler parameter to require authentication.
pub struct CurrentUser {
    pub user: identity::AuthUser,
}

impl<S> axum::extract::FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<RequestIdentity>()
            .and_then(|identity| identity.0.clone())
            .map(|user| Self { user })
            .ok_or(AuthError::Unauthorized)
    }
}

// =============================================================================
// ERROR MAPPING
// =============================================================================

pub(crate) fn error_status(error: &AuthError) -> StatusCode {
    match error {
        AuthError::InvalidInput | AuthError::UserExists => StatusCode::BAD_REQUEST,
        AuthError::InvalidCredentials | AuthError::Unauthorized => StatusCode::UNAUTHORIZED,
        AuthError::NotFound => StatusCode::NOT_FOUND,
        AuthError::Db(_) | AuthError::Hash | AuthError::Token(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = error_status(&self);
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "auth request failed");
            return (status, Json(serde_json::json!({ "error": "Internal server error" }))).into_response();
        }
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/auth/register` — create an account, set the session cookie,
/// return the public identity.
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<Credentials>,
) -> Result<(CookieJar, Json<UserEnvelope>), AuthError> {
    let (user, session) = account::register(&state.pool, &state.keys, &body.email, &body.password).await?;
    Ok((jar.add(session_cookie(session)), Json(UserEnvelope { user })))
}

/// `POST /api/auth/login` — authenticate, set the session cookie, return
/// the public identity.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<Credentials>,
) -> Result<(CookieJar, Json<UserEnvelope>), AuthError> {
    let (user, session) = account::login(&state.pool, &state.keys, &body.email, &body.password).await?;
    Ok((jar.add(session_cookie(session)), Json(UserEnvelope { user })))
}

/// `POST /api/auth/logout` — clear the session cookie. Always succeeds;
/// does not care whether the current session was valid.
pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    (jar.add(clear_session_cookie()), StatusCode::OK)
}

/// `GET /api/auth/me` — re-fetch and return the current user.
///
/// The identity is re-read from the store so a still-valid token for a
/// deleted user yields 404 instead of echoing stale claims.
pub async fn me(State(state): State<AppState>, current: CurrentUser) -> Result<Json<UserEnvelope>, AuthError> {
    let user = account::current_user(&state.pool, current.user.id).await?;
    Ok(Json(UserEnvelope { user }))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
