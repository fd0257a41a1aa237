//! Transient toast notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages push toasts through [`Notifier`]; `ToastContainer` renders them.
//! In the browser each toast removes itself after `ttl_ms`.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use leptos::prelude::{RwSignal, Update};

/// Visual flavor of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// One visible notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub text: String,
}

/// Toast queue provided through Leptos context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotifyState {
    pub toasts: Vec<Toast>,
    pub next_id: u64,
    pub ttl_ms: u32,
}

impl Default for NotifyState {
    fn default() -> Self {
        Self::with_ttl(5000)
    }
}

impl NotifyState {
    pub fn with_ttl(ttl_ms: u32) -> Self {
        Self { toasts: Vec::new(), next_id: 1, ttl_ms }
    }

    /// Append a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, text: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, kind, text: text.into() });
        id
    }

    /// Remove the toast with `id`; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

/// Sink for user-facing success and error messages.
pub trait Notifier {
    fn success(&self, text: &str);
    fn error(&self, text: &str);
}

impl Notifier for RwSignal<NotifyState> {
    fn success(&self, text: &str) {
        show(*self, ToastKind::Success, text);
    }

    fn error(&self, text: &str) {
        show(*self, ToastKind::Error, text);
    }
}

fn show(state: RwSignal<NotifyState>, kind: ToastKind, text: &str) {
    let mut pushed = None;
    state.update(|s| pushed = Some((s.push(kind, text), s.ttl_ms)));

    #[cfg(feature = "hydrate")]
    {
        if let Some((id, ttl_ms)) = pushed {
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(ttl_ms))).await;
                state.update(|s| s.dismiss(id));
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = pushed;
    }
}
