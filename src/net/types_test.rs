use super::*;

#[test]
fn signin_request_serializes_email_and_password() {
    let body = SigninRequest { email: "a@b.com", password: "secret1" };
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json, serde_json::json!({ "email": "a@b.com", "password": "secret1" }));
}

#[test]
fn signin_response_decodes_success_envelope() {
    let raw = r#"{"success":true,"message":"ok","data":{"token":"t1","name":"A"}}"#;
    let resp: SigninResponse = serde_json::from_str(raw).unwrap();
    assert!(resp.success);
    assert_eq!(resp.message, "ok");
    assert_eq!(
        resp.data,
        Some(SigninPayload { token: "t1".to_owned(), name: "A".to_owned() })
    );
}

#[test]
fn signin_response_missing_fields_default() {
    let resp: SigninResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();
    assert!(!resp.success);
    assert!(resp.message.is_empty());
    assert!(resp.data.is_none());
}

#[test]
fn signin_response_null_data_is_none() {
    let resp: SigninResponse =
        serde_json::from_str(r#"{"success":false,"message":"nope","data":null}"#).unwrap();
    assert_eq!(resp.message, "nope");
    assert!(resp.data.is_none());
}

#[test]
fn error_body_reads_message() {
    let body: ErrorBody = serde_json::from_str(r#"{"message":"Invalid credentials"}"#).unwrap();
    assert_eq!(body.message.as_deref(), Some("Invalid credentials"));
}

#[test]
fn error_body_tolerates_unknown_fields() {
    let body: ErrorBody = serde_json::from_str(r#"{"error":"bad","code":401}"#).unwrap();
    assert!(body.message.is_none());
}
