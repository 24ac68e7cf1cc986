use super::*;

#[test]
fn auth_endpoint_formats_expected_paths() {
    assert_eq!(auth_endpoint("me"), "/api/auth/me");
    assert_eq!(auth_endpoint("login"), "/api/auth/login");
    assert_eq!(auth_endpoint("logout"), "/api/auth/logout");
}

#[test]
fn credentials_body_carries_both_fields() {
    let body = credentials_body("a@x.com", "abcdef");
    assert_eq!(body["email"], "a@x.com");
    assert_eq!(body["password"], "abcdef");
}

#[test]
fn credentials_body_has_no_extra_fields() {
    let body = credentials_body("a@x.com", "abcdef");
    assert_eq!(body.as_object().unwrap().len(), 2);
}
