//! Sign-in page with email + password credentials.

#[cfg(test)]
#[path = "signin_test.rs"]
mod signin_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::net::api::HttpSigninApi;
use crate::pages::signin_submit::SigninFlow;
use crate::state::notify::NotifyState;
use crate::state::session::SessionState;
use crate::state::signin_form::{FormInput, FormState};
use crate::util::navigate::RouterNavigator;

fn submit_label(busy: bool) -> &'static str {
    if busy { "Signing in..." } else { "Sign In" }
}

#[component]
pub fn SigninPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notices = expect_context::<RwSignal<NotifyState>>();
    let config = expect_context::<ClientConfig>();

    let form = RwSignal::new(FormState::default());
    let busy = RwSignal::new(false);

    let flow = SigninFlow::new(
        HttpSigninApi::new(config.api_base.clone()),
        session,
        RouterNavigator::new(use_navigate()),
        notices,
        busy,
    )
    .with_home_route(config.home_route.clone());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let snapshot = form.get_untracked();

        #[cfg(feature = "hydrate")]
        {
            let flow = flow.clone();
            leptos::task::spawn_local(async move {
                flow.submit(&snapshot).await;
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&flow, snapshot);
        }
    };

    let edit = move |input: FormInput| form.update(|f| f.apply(input));

    view! {
        <div class="signin-page">
            <div class="signin-card">
                <div class="signin-card__form">
                    <h1>"Welcome Back"</h1>

                    <form class="signin-form" on:submit=on_submit>
                        <label class="signin-form__label" for="email">"Email"</label>
                        <input
                            class="signin-input"
                            type="email"
                            id="email"
                            placeholder="Enter your email"
                            required
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| edit(FormInput::Email(event_target_value(&ev)))
                        />

                        <label class="signin-form__label" for="password">"Password"</label>
                        <input
                            class="signin-input"
                            type="password"
                            id="password"
                            placeholder="6+ characters"
                            required
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| edit(FormInput::Password(event_target_value(&ev)))
                        />

                        <div class="signin-form__row">
                            <label class="signin-form__remember">
                                <input
                                    type="checkbox"
                                    id="remember_me"
                                    prop:checked=move || form.with(|f| f.remember_me)
                                    on:change=move |ev| edit(FormInput::RememberMe(event_target_checked(&ev)))
                                />
                                <span>"Remember me"</span>
                            </label>
                            <button type="button" class="signin-form__link">
                                "Forgot password?"
                            </button>
                        </div>

                        <button class="signin-button" type="submit" disabled=move || busy.get()>
                            {move || submit_label(busy.get())}
                        </button>

                        <div class="signin-divider">
                            <span>"Or continue with"</span>
                        </div>

                        <button type="button" class="signin-button signin-button--google">
                            "Continue with Google"
                        </button>
                    </form>

                    <p class="signin-card__footer">
                        "Don't have an account? "
                        <A href=config.signup_route.clone()>"Register"</A>
                    </p>
                </div>

                <div class="signin-card__image">
                    <img src="/stethoscope.jpg" alt="Medical Stethoscope"/>
                </div>
            </div>
        </div>
    }
}
