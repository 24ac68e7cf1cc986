//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app root owns one `RwSignal<AuthState>` and one `SessionReady` and
//! provides both via context. Route guards and user-aware components read
//! identity only through them; nothing else holds session state.
//!
//! Operations here assume one auth call in flight at a time. Overlapping
//! calls (double-clicked login) are not deduplicated; the last response to
//! resolve wins.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::{Arc, Mutex};

use futures::FutureExt;
use futures::channel::oneshot;
use futures::future::Shared;
use leptos::prelude::*;

use identity::AuthUser;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    /// Confirmed identity, absent while anonymous or unconfirmed.
    pub user: Option<AuthUser>,
    /// True while an auth operation is in flight.
    pub loading: bool,
}

/// One-shot signal resolved when the post-hydration bootstrap finishes.
///
/// Route guards await this (with a timeout) instead of polling `loading`,
/// so the bounded-wait contract holds without a busy-wait.
#[derive(Clone)]
pub struct SessionReady {
    tx: Arc<Mutex<Option<oneshot::Sender<()>>>>,
    rx: Shared<oneshot::Receiver<()>>,
}

impl SessionReady {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = oneshot::channel();
        Self { tx: Arc::new(Mutex::new(Some(tx))), rx: rx.shared() }
    }

    /// Resolve the signal. Later calls are no-ops.
    pub fn resolve(&self) {
        if let Ok(mut slot) = self.tx.lock() {
            if let Some(tx) = slot.take() {
                let _ = tx.send(());
            }
        }
    }

    #[must_use]
    pub fn resolved(&self) -> bool {
        self.tx.lock().map(|slot| slot.is_none()).unwrap_or(false)
    }

    /// Completes once [`resolve`](Self::resolve) has been called;
    /// immediately if it already was.
    pub async fn wait(&self) {
        let _ = self.rx.clone().await;
    }
}

impl Default for SessionReady {
    fn default() -> Self {
        Self::new()
    }
}

/// Scoped `loading` cleanup: the flag is restored on drop, so a cancelled
/// or panicking call cannot leave it stuck `true`.
struct LoadingGuard(RwSignal<AuthState>);

impl LoadingGuard {
    fn begin(auth: RwSignal<AuthState>) -> Self {
        auth.update(|s| s.loading = true);
        Self(auth)
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        // try_update: the owning scope may already be disposed mid-teardown.
        let _ = self.0.try_update(|s| s.loading = false);
    }
}

/// Reconcile the store with the server's view via `GET /api/auth/me`.
///
/// Any failure clears `user`: there is no confirmed session until the
/// server says otherwise. Resolves `ready` regardless of outcome.
pub async fn bootstrap(auth: RwSignal<AuthState>, ready: SessionReady) {
    {
        let _guard = LoadingGuard::begin(auth);
        let user = crate::net::api::fetch_me().await;
        auth.update(|s| s.user = user);
    }
    ready.resolve();
}

/// Log in. Returns whether it succeeded; on failure the previous identity
/// is left untouched and the caller only learns the boolean.
pub async fn login(auth: RwSignal<AuthState>, email: String, password: String) -> bool {
    let _guard = LoadingGuard::begin(auth);
    match crate::net::api::login(&email, &password).await {
        Some(user) => {
            auth.update(|s| s.user = Some(user));
            true
        }
        None => false,
    }
}

/// Register a new account. Same reporting contract as [`login`].
pub async fn register(auth: RwSignal<AuthState>, email: String, password: String) -> bool {
    let _guard = LoadingGuard::begin(auth);
    match crate::net::api::register(&email, &password).await {
        Some(user) => {
            auth.update(|s| s.user = Some(user));
            true
        }
        None => false,
    }
}

/// Log out and clear the identity. The cookie is cleared server-side even
/// if the current session was already invalid.
pub async fn logout(auth: RwSignal<AuthState>) {
    let _guard = LoadingGuard::begin(auth);
    crate::net::api::logout().await;
    auth.update(|s| s.user = None);
}
