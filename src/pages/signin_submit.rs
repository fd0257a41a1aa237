//! Submission flow behind the sign-in form.
//!
//! DESIGN
//! ======
//! The flow only talks to its collaborators through traits: [`SigninApi`]
//! for the network call, [`SessionStore`] for the issued session,
//! [`Navigator`] for the redirect and [`Notifier`] for toasts. The page wires
//! the browser implementations; tests wire recording fakes.
//!
//! ERROR HANDLING
//! ==============
//! Every failure ends in exactly one error toast. The server's message is
//! preferred, then [`FAILURE_FALLBACK`]. Form state is never touched so the
//! user can retry.

#[cfg(test)]
#[path = "signin_submit_test.rs"]
mod signin_submit_test;

use leptos::prelude::{GetUntracked, RwSignal, Set};

use crate::config::HOME_ROUTE;
use crate::net::api::SigninApi;
use crate::net::error::ApiError;
use crate::net::types::SigninResponse;
use crate::state::notify::Notifier;
use crate::state::session::{Session, SessionStore};
use crate::state::signin_form::FormState;
use crate::util::navigate::Navigator;

/// Shown when the server gives no usable reason for a failure.
pub const FAILURE_FALLBACK: &str = "Login failed! Please check your credentials.";
/// Shown when the server accepts the sign-in without a message.
pub const SUCCESS_FALLBACK: &str = "Signed in.";

/// Tracks whether a submission is awaiting the server.
pub trait PendingFlag {
    fn is_pending(&self) -> bool;
    fn set_pending(&self, pending: bool);
}

impl PendingFlag for RwSignal<bool> {
    fn is_pending(&self) -> bool {
        self.get_untracked()
    }

    fn set_pending(&self, pending: bool) {
        self.set(pending);
    }
}

/// Result of one call to [`SigninFlow::submit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The server accepted the credentials; the user was redirected.
    SignedIn(Session),
    /// The attempt failed; carries the text shown to the user.
    Failed(String),
    /// Another submission was still in flight.
    Ignored,
}

/// Sign-in submission wired to its collaborators.
#[derive(Clone)]
pub struct SigninFlow<A, S, N, T, P> {
    api: A,
    session: S,
    navigator: N,
    notifier: T,
    pending: P,
    home_route: String,
}

impl<A, S, N, T, P> SigninFlow<A, S, N, T, P>
where
    A: SigninApi,
    S: SessionStore,
    N: Navigator,
    T: Notifier,
    P: PendingFlag,
{
    pub fn new(api: A, session: S, navigator: N, notifier: T, pending: P) -> Self {
        Self { api, session, navigator, notifier, pending, home_route: HOME_ROUTE.to_owned() }
    }

    #[must_use]
    pub fn with_home_route(mut self, home_route: impl Into<String>) -> Self {
        self.home_route = home_route.into();
        self
    }

    /// Send the form's credentials once and act on the answer.
    ///
    /// On acceptance the session store receives the issued token and name, a
    /// success toast is shown and the user is sent to the home route. On any
    /// failure an error toast is shown and nothing else changes.
    pub async fn submit(&self, form: &FormState) -> SubmitOutcome {
        if self.pending.is_pending() {
            log::debug!("sign-in already in flight; ignoring submit");
            return SubmitOutcome::Ignored;
        }

        self.pending.set_pending(true);
        let result = self.api.signin(&form.email, &form.password).await;
        self.pending.set_pending(false);

        match classify(result) {
            Ok((session, message)) => {
                self.session.login(&session.token, &session.name);
                self.notifier.success(&message);
                self.navigator.navigate(&self.home_route);
                SubmitOutcome::SignedIn(session)
            }
            Err(message) => {
                self.notifier.error(&message);
                SubmitOutcome::Failed(message)
            }
        }
    }
}

/// Split a sign-in result into the issued session plus success text, or the
/// error text to show.
fn classify(result: Result<SigninResponse, ApiError>) -> Result<(Session, String), String> {
    match result {
        Ok(SigninResponse { success: true, message, data: Some(payload) }) => {
            let session = Session { token: payload.token, name: payload.name };
            Ok((session, non_blank(message).unwrap_or_else(|| SUCCESS_FALLBACK.to_owned())))
        }
        Ok(SigninResponse { success: true, .. }) => {
            log::error!("sign-in accepted without a session payload");
            Err(FAILURE_FALLBACK.to_owned())
        }
        Ok(resp) => {
            log::warn!("sign-in refused: {}", resp.message);
            Err(non_blank(resp.message).unwrap_or_else(|| FAILURE_FALLBACK.to_owned()))
        }
        Err(e) => {
            log::error!("sign-in error: {e}");
            Err(e.server_message().map_or_else(|| FAILURE_FALLBACK.to_owned(), ToOwned::to_owned))
        }
    }
}

fn non_blank(text: String) -> Option<String> {
    if text.trim().is_empty() { None } else { Some(text) }
}
