//! Landing page for signed-in users.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::{SessionState, logout};
use crate::util::auth::install_unauth_redirect;

/// Greets the current user. Redirects to the sign-in page without a session.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_unauth_redirect(session, use_navigate());

    let name = move || session.with(|s| s.display_name().unwrap_or_default().to_owned());

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>"Welcome, " {name}</h1>
                <button class="btn" on:click=move |_| logout(session)>
                    "Sign out"
                </button>
            </header>
        </div>
    }
}
