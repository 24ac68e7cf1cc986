//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`; the browser
//! attaches the session cookie itself.
//! Server-side (SSR): stubs returning `None` — SSR identity comes from the
//! request context, not from a loopback HTTP call.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option` outputs instead of errors. An unauthenticated
//! response and a transport failure both collapse to `None`; failure detail
//! is logged here and goes no further.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use identity::{AuthUser, UserProfile};

#[cfg(any(test, feature = "hydrate"))]
fn credentials_body(email: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "email": email, "password": password })
}

#[cfg(any(test, feature = "hydrate"))]
fn auth_endpoint(op: &str) -> String {
    format!("/api/auth/{op}")
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_me() -> Option<AuthUser> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&auth_endpoint("me"))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<identity::UserEnvelope>().await.ok().map(|e| e.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

#[cfg(feature = "hydrate")]
async fn post_credentials(op: &str, email: &str, password: &str) -> Option<AuthUser> {
    let request = gloo_net::http::Request::post(&auth_endpoint(op))
        .json(&credentials_body(email, password))
        .ok()?;
    let resp = match request.send().await {
        Ok(resp) => resp,
        Err(e) => {
            log::warn!("{op} request failed: {e}");
            return None;
        }
    };
    if !resp.ok() {
        log::warn!("{op} rejected: {}", resp.status());
        return None;
    }
    resp.json::<identity::UserEnvelope>().await.ok().map(|e| e.user)
}

/// Log in via `POST /api/auth/login`. `None` covers wrong credentials and
/// transport failures alike.
pub async fn login(email: &str, password: &str) -> Option<AuthUser> {
    #[cfg(feature = "hydrate")]
    {
        post_credentials("login", email, password).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        None
    }
}

/// Register via `POST /api/auth/register`.
pub async fn register(email: &str, password: &str) -> Option<AuthUser> {
    #[cfg(feature = "hydrate")]
    {
        post_credentials("register", email, password).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        None
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post(&auth_endpoint("logout"))
            .send()
            .await;
    }
}

/// Fetch the current user's profile from `/api/user/profile`.
pub async fn fetch_profile() -> Option<UserProfile> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/user/profile")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<identity::ProfileEnvelope>().await.ok().map(|e| e.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
