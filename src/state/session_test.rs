use leptos::prelude::GetUntracked;

use super::*;

fn signed_in(token: &str, name: &str) -> SessionState {
    SessionState {
        session: Some(Session { token: token.to_owned(), name: name.to_owned() }),
        loading: false,
    }
}

// =============================================================
// SessionState
// =============================================================

#[test]
fn session_state_default_signed_out() {
    let state = SessionState::default();
    assert!(!state.is_signed_in());
    assert!(!state.loading);
    assert_eq!(state.display_name(), None);
}

#[test]
fn pending_state_is_loading_without_session() {
    let state = SessionState::pending();
    assert!(state.loading);
    assert!(!state.is_signed_in());
}

#[test]
fn display_name_reads_session() {
    let state = signed_in("t1", "A");
    assert!(state.is_signed_in());
    assert_eq!(state.display_name(), Some("A"));
}

#[test]
fn session_json_shape_is_stable() {
    let session = Session { token: "t1".to_owned(), name: "A".to_owned() };
    let json = serde_json::to_string(&session).unwrap();
    assert_eq!(json, r#"{"token":"t1","name":"A"}"#);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn restored_without_browser_storage_is_signed_out_and_loaded() {
    assert_eq!(SessionState::restored(), SessionState::default());
}

// =============================================================
// Signal-backed store
// =============================================================

#[test]
fn login_on_signal_records_token_and_name() {
    let state = RwSignal::new(SessionState::pending());
    state.login("t1", "A");
    assert_eq!(state.get_untracked(), signed_in("t1", "A"));
}

#[test]
fn login_replaces_previous_session() {
    let state = RwSignal::new(signed_in("t1", "A"));
    state.login("t2", "B");
    assert_eq!(state.get_untracked().display_name(), Some("B"));
}

#[test]
fn logout_clears_session() {
    let state = RwSignal::new(signed_in("t1", "A"));
    logout(state);
    assert_eq!(state.get_untracked(), SessionState::default());
}
