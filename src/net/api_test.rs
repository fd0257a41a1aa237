use super::*;

#[test]
fn signin_endpoint_appends_path() {
    assert_eq!(signin_endpoint("/api"), "/api/auth/signin");
    assert_eq!(signin_endpoint("https://auth.example.com/v1/"), "https://auth.example.com/v1/auth/signin");
}

#[test]
fn http_api_endpoint_uses_base() {
    let api = HttpSigninApi::new("/api");
    assert_eq!(api.endpoint(), "/api/auth/signin");
}

#[test]
fn rejection_keeps_server_message() {
    let err = rejection(401, r#"{"message":"Invalid credentials"}"#);
    assert_eq!(
        err,
        ApiError::Rejected { status: 401, message: Some("Invalid credentials".to_owned()) }
    );
}

#[test]
fn rejection_without_json_body_has_no_message() {
    assert_eq!(rejection(502, "<html>Bad Gateway</html>"), ApiError::Rejected { status: 502, message: None });
}

#[test]
fn rejection_drops_blank_message() {
    assert_eq!(rejection(400, r#"{"message":""}"#), ApiError::Rejected { status: 400, message: None });
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn signin_is_unavailable_outside_browser() {
    let api = HttpSigninApi::new("/api");
    let result = futures::executor::block_on(api.signin("a@b.com", "secret1"));
    assert_eq!(result, Err(ApiError::Unavailable));
}
