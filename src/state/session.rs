//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The sign-in page writes a [`Session`] here after the server accepts the
//! credentials. Route guards and the home page read it. The session is
//! mirrored into `localStorage` so a reload keeps the user signed in.
//!
//! The root app starts in the `loading` state on both server and client so
//! the hydrated markup matches the server render; the stored session is read
//! by a client-only effect afterwards.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::{Effect, RwSignal, Set, Update};
use serde::{Deserialize, Serialize};

use crate::util::storage;

/// `localStorage` key holding the persisted session JSON.
pub const SESSION_STORAGE_KEY: &str = "signin_session";

/// Token and display name of an authenticated user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub name: String,
}

/// Authentication state provided through Leptos context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub session: Option<Session>,
    /// True until the persisted session has been read.
    pub loading: bool,
}

impl SessionState {
    /// Initial state before browser storage has been consulted.
    pub fn pending() -> Self {
        Self { session: None, loading: true }
    }

    /// State seeded from the session persisted by a previous sign-in.
    pub fn restored() -> Self {
        Self { session: storage::load_json(SESSION_STORAGE_KEY), loading: false }
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn display_name(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.name.as_str())
    }
}

/// Receiver of sessions issued by the authentication server.
pub trait SessionStore {
    fn login(&self, token: &str, name: &str);
}

impl SessionStore for RwSignal<SessionState> {
    fn login(&self, token: &str, name: &str) {
        let session = Session { token: token.to_owned(), name: name.to_owned() };
        storage::save_json(SESSION_STORAGE_KEY, &session);
        self.update(|state| {
            state.session = Some(session);
            state.loading = false;
        });
    }
}

/// Replace the pending state with the persisted session. Effects only run in
/// the browser, so server renders stay in the pending state.
pub fn install_restore(state: RwSignal<SessionState>) {
    Effect::new(move || state.set(SessionState::restored()));
}

/// Forget the current session, both in memory and in storage.
pub fn logout(state: RwSignal<SessionState>) {
    storage::remove(SESSION_STORAGE_KEY);
    state.set(SessionState::default());
}
