use super::*;
use identity::AuthUser;

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = AuthState { user: None, loading: false };
    assert!(should_redirect_unauth(&state, false));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState { user: None, loading: true };
    assert!(!should_redirect_unauth(&state, false));
}

#[test]
fn should_redirect_when_loading_stuck_past_timeout() {
    let state = AuthState { user: None, loading: true };
    assert!(should_redirect_unauth(&state, true));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = AuthState {
        user: Some(AuthUser { id: 1, email: "a@x.com".into() }),
        loading: false,
    };
    assert!(!should_redirect_unauth(&state, false));
}

#[test]
fn should_not_redirect_when_user_exists_even_while_loading() {
    let state = AuthState {
        user: Some(AuthUser { id: 1, email: "a@x.com".into() }),
        loading: true,
    };
    assert!(!should_redirect_unauth(&state, false));
}

#[test]
fn should_not_redirect_when_user_exists_after_timeout() {
    let state = AuthState {
        user: Some(AuthUser { id: 1, email: "a@x.com".into() }),
        loading: false,
    };
    assert!(!should_redirect_unauth(&state, true));
}

#[test]
fn bootstrap_wait_budget_is_one_second() {
    // 10 poll attempts x 100ms in the original contract, preserved as a
    // single bounded await.
    assert_eq!(BOOTSTRAP_WAIT, Duration::from_millis(1000));
}
