use super::*;

// =============================================================================
// validate_registration
// =============================================================================

#[test]
fn registration_rejects_empty_email() {
    assert!(matches!(validate_registration("", "abcdef"), Err(AuthError::InvalidInput)));
}

#[test]
fn registration_rejects_empty_password() {
    assert!(matches!(validate_registration("a@x.com", ""), Err(AuthError::InvalidInput)));
}

#[test]
fn registration_rejects_short_password() {
    assert!(matches!(validate_registration("a@x.com", "abc"), Err(AuthError::InvalidInput)));
}

#[test]
fn registration_accepts_six_char_password() {
    assert!(validate_registration("a@x.com", "abcdef").is_ok());
}

// =============================================================================
// validate_login
// =============================================================================

#[test]
fn login_rejects_missing_fields() {
    assert!(matches!(validate_login("", "pw"), Err(AuthError::InvalidInput)));
    assert!(matches!(validate_login("a@x.com", ""), Err(AuthError::InvalidInput)));
}

#[test]
fn login_accepts_any_nonempty_password() {
    // Length is only enforced at registration.
    assert!(validate_login("a@x.com", "abc").is_ok());
}

// =============================================================================
// Live-DB flows. Run with:
//   cargo test --features live-db-tests
// against TEST_DATABASE_URL.
// =============================================================================

#[cfg(feature = "live-db-tests")]
mod live {
    use rand::Rng;

    use super::super::*;
    use crate::state::test_helpers::live_app_state;

    fn unique_email(tag: &str) -> String {
        format!("{tag}-{}@example.test", rand::rng().random::<u32>())
    }

    #[tokio::test]
    async fn register_then_login_round_trip() {
        let state = live_app_state().await;
        let email = unique_email("round-trip");

        let (registered, session) = register(&state.pool, &state.keys, &email, "abcdef")
            .await
            .expect("register should succeed");
        assert_eq!(registered.email, email);
        assert!(token::verify(&state.keys, &session).is_some());

        let (authed, _) = login(&state.pool, &state.keys, &email, "abcdef")
            .await
            .expect("login should succeed");
        assert_eq!(authed.id, registered.id);
    }

    #[tokio::test]
    async fn duplicate_registration_fails_user_exists() {
        let state = live_app_state().await;
        let email = unique_email("duplicate");

        register(&state.pool, &state.keys, &email, "abcdef").await.unwrap();
        let second = register(&state.pool, &state.keys, &email, "other1").await;
        assert!(matches!(second, Err(AuthError::UserExists)));
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_fail_identically() {
        let state = live_app_state().await;
        let email = unique_email("unified");

        register(&state.pool, &state.keys, &email, "abcdef").await.unwrap();

        let wrong_password = login(&state.pool, &state.keys, &email, "abcdeg").await;
        let unknown_email = login(&state.pool, &state.keys, "nobody@example.test", "abcdef").await;

        assert!(matches!(wrong_password, Err(AuthError::InvalidCredentials)));
        assert!(matches!(unknown_email, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn current_user_refetches_and_reports_missing_record() {
        let state = live_app_state().await;
        let email = unique_email("refetch");

        let (registered, _) = register(&state.pool, &state.keys, &email, "abcdef").await.unwrap();
        let fetched = current_user(&state.pool, registered.id).await.unwrap();
        assert_eq!(fetched, registered);

        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(registered.id)
            .execute(&state.pool)
            .await
            .unwrap();

        // Token still verifies, but the backing record is gone.
        let missing = current_user(&state.pool, registered.id).await;
        assert!(matches!(missing, Err(AuthError::NotFound)));
    }

    #[tokio::test]
    async fn profile_includes_timestamps() {
        let state = live_app_state().await;
        let email = unique_email("profile");

        let (registered, _) = register(&state.pool, &state.keys, &email, "abcdef").await.unwrap();
        let profile = profile(&state.pool, registered.id).await.unwrap();
        assert_eq!(profile.email, email);
        assert!(!profile.created_at.is_empty());
        assert!(!profile.updated_at.is_empty());
    }
}
