use super::*;

#[test]
fn hash_then_verify_succeeds() {
    let hash = hash_password("abcdef").unwrap();
    assert!(verify_password("abcdef", &hash));
}

#[test]
fn wrong_password_fails_verification() {
    let hash = hash_password("abcdef").unwrap();
    assert!(!verify_password("abcdeg", &hash));
}

#[test]
fn hash_is_phc_format_and_salted() {
    let a = hash_password("abcdef").unwrap();
    let b = hash_password("abcdef").unwrap();
    assert!(a.starts_with("$argon2"));
    // Random salts: same password, different hashes.
    assert_ne!(a, b);
}

#[test]
fn corrupt_stored_hash_counts_as_mismatch() {
    assert!(!verify_password("abcdef", "not-a-phc-string"));
    assert!(!verify_password("abcdef", ""));
}
