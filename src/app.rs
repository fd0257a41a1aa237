//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_container::ToastContainer;
use crate::config::ClientConfig;
use crate::pages::{home::HomePage, signin::SigninPage};
use crate::state::notify::NotifyState;
use crate::state::session::{SessionState, install_restore};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides config, session, and notification contexts and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let session = RwSignal::new(SessionState::pending());
    install_restore(session);
    let notices = RwSignal::new(NotifyState::with_ttl(config.toast_ttl_ms));

    provide_context(config);
    provide_context(session);
    provide_context(notices);

    view! {
        <Stylesheet id="leptos" href="/pkg/signin-ui.css"/>
        <Title text="Sign In"/>

        <ToastContainer/>
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("sign-in") view=SigninPage/>
            </Routes>
        </Router>
    }
}
