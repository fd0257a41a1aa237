//! Stack of transient toast notifications.

#[cfg(test)]
#[path = "toast_container_test.rs"]
mod toast_container_test;

use leptos::prelude::*;

use crate::state::notify::{NotifyState, Toast, ToastKind};

fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "toast toast--success",
        ToastKind::Error => "toast toast--error",
    }
}

/// Renders every queued toast; clicking a toast dismisses it.
#[component]
pub fn ToastContainer() -> impl IntoView {
    let notices = expect_context::<RwSignal<NotifyState>>();

    view! {
        <div class="toast-container" role="status" aria-live="polite">
            <For
                each=move || notices.get().toasts
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast_class(toast.kind) on:click=move |_| notices.update(|s| s.dismiss(id))>
                            {toast.text}
                        </div>
                    }
                }
            />
        </div>
    }
}
