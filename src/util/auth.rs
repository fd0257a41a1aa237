//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::config::SIGNIN_ROUTE;
use crate::state::session::SessionState;

fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.loading && !state.is_signed_in()
}

/// Redirect to the sign-in page once the session has loaded and none is present.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate(SIGNIN_ROUTE, NavigateOptions::default());
        }
    });
}
