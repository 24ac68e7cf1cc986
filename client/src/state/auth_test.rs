use std::future::Future;

use super::*;

#[test]
fn auth_state_defaults_to_anonymous_not_loading() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn session_ready_starts_unresolved() {
    let ready = SessionReady::new();
    assert!(!ready.resolved());
}

#[test]
fn session_ready_resolve_marks_resolved() {
    let ready = SessionReady::new();
    ready.resolve();
    assert!(ready.resolved());
}

#[test]
fn session_ready_resolve_is_idempotent() {
    let ready = SessionReady::new();
    ready.resolve();
    ready.resolve();
    assert!(ready.resolved());
}

#[test]
fn session_ready_wait_completes_after_resolve() {
    let ready = SessionReady::new();
    ready.resolve();
    futures::executor::block_on(ready.wait());
}

#[test]
fn session_ready_clones_share_resolution() {
    let ready = SessionReady::new();
    let observer = ready.clone();
    ready.resolve();
    assert!(observer.resolved());
    futures::executor::block_on(observer.wait());
}

#[test]
fn session_ready_wait_completes_for_all_waiters() {
    let ready = SessionReady::new();
    let a = ready.clone();
    let b = ready.clone();
    ready.resolve();
    futures::executor::block_on(async move {
        a.wait().await;
        b.wait().await;
    });
}

#[test]
fn loading_guard_restores_flag_on_drop() {
    let owner = Owner::new();
    owner.set();
    let auth = RwSignal::new(AuthState::default());
    {
        let _guard = LoadingGuard::begin(auth);
        assert!(auth.get_untracked().loading);
    }
    assert!(!auth.get_untracked().loading);
}

#[test]
fn loading_guard_clears_flag_when_future_dropped_mid_flight() {
    let owner = Owner::new();
    owner.set();
    let auth = RwSignal::new(AuthState::default());

    let mut op = Box::pin(async move {
        let _guard = LoadingGuard::begin(auth);
        futures::future::pending::<()>().await;
    });
    let waker = futures::task::noop_waker();
    let mut cx = std::task::Context::from_waker(&waker);
    assert!(op.as_mut().poll(&mut cx).is_pending());
    assert!(auth.get_untracked().loading);

    // Abandoning the in-flight call must not leave the flag stuck.
    drop(op);
    assert!(!auth.get_untracked().loading);
}

#[test]
fn overlapping_loading_scopes_end_with_flag_clear() {
    let owner = Owner::new();
    owner.set();
    let auth = RwSignal::new(AuthState::default());

    // Back-to-back submits are not deduplicated; whichever order the
    // scopes unwind in, loading must end false.
    let first = LoadingGuard::begin(auth);
    let second = LoadingGuard::begin(auth);
    assert!(auth.get_untracked().loading);
    drop(first);
    drop(second);
    assert!(!auth.get_untracked().loading);
}

#[test]
fn bootstrap_resolves_ready_and_ends_not_loading() {
    let owner = Owner::new();
    owner.set();
    let auth = RwSignal::new(AuthState::default());
    let ready = SessionReady::new();
    futures::executor::block_on(bootstrap(auth, ready.clone()));
    assert!(ready.resolved());
    assert!(!auth.get_untracked().loading);
}
