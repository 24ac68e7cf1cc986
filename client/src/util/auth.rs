//! Route-guard helpers shared by protected pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes must apply identical unauthenticated-redirect behavior:
//! wait (bounded) for the session bootstrap, then redirect to `/login`
//! whenever no confirmed session exists. The guard awaits the store's
//! one-shot `SessionReady` signal with a timeout instead of polling the
//! loading flag, which keeps the same bounded-wait contract latency-free.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::time::Duration;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthState, SessionReady};

/// Upper bound on how long a protected route waits for bootstrap before
/// deciding with whatever identity it has.
pub const BOOTSTRAP_WAIT: Duration = Duration::from_millis(1000);

/// Redirect decision for a protected route: no confirmed user, and either
/// auth has settled or the bounded wait already timed out. After a timeout
/// a still-set loading flag no longer defers the decision —
/// unauthenticated until proven otherwise.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState, timed_out: bool) -> bool {
    state.user.is_none() && (!state.loading || timed_out)
}

/// Outcome of the guard's bounded wait for bootstrap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardWait {
    /// Bootstrap finished inside the budget.
    Resolved,
    /// Budget elapsed first; treat as "no confirmed session yet".
    TimedOut,
}

/// Await the bootstrap signal, giving up after [`BOOTSTRAP_WAIT`].
#[cfg(feature = "hydrate")]
pub async fn wait_for_bootstrap(ready: &SessionReady) -> GuardWait {
    use futures::future::{Either, select};

    let done = std::pin::pin!(ready.wait());
    let budget = std::pin::pin!(gloo_timers::future::sleep(BOOTSTRAP_WAIT));
    match select(done, budget).await {
        Either::Left(_) => GuardWait::Resolved,
        Either::Right(_) => GuardWait::TimedOut,
    }
}

/// Guard a protected route: after the bounded wait, redirect to `/login`
/// whenever no confirmed session exists. Also keeps watching the store so
/// a later logout redirects too. Installed fresh on every mount — the
/// decision is never cached across navigations.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, ready: SessionReady, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let waited = RwSignal::new(ready.resolved());
    let timed_out = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let ready = ready.clone();
        leptos::task::spawn_local(async move {
            if wait_for_bootstrap(&ready).await == GuardWait::TimedOut {
                timed_out.set(true);
            }
            waited.set(true);
        });
    }

    let navigate = navigate.clone();
    Effect::new(move || {
        if !waited.get() {
            return;
        }
        if should_redirect_unauth(&auth.get(), timed_out.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
