use super::*;

#[test]
fn server_message_from_rejection() {
    let err = ApiError::Rejected { status: 401, message: Some("Invalid credentials".to_owned()) };
    assert_eq!(err.server_message(), Some("Invalid credentials"));
}

#[test]
fn server_message_ignores_blank_text() {
    let err = ApiError::Rejected { status: 401, message: Some("  ".to_owned()) };
    assert_eq!(err.server_message(), None);
}

#[test]
fn server_message_absent_for_transport_errors() {
    assert_eq!(ApiError::Network("offline".to_owned()).server_message(), None);
    assert_eq!(ApiError::Decode("eof".to_owned()).server_message(), None);
    assert_eq!(ApiError::Unavailable.server_message(), None);
}

#[test]
fn display_includes_status() {
    let err = ApiError::Rejected { status: 500, message: None };
    assert_eq!(err.to_string(), "request rejected: status 500");
}
