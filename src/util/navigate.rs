//! Client-side navigation seam.
//!
//! Pages hold a [`Navigator`] instead of calling `use_navigate` directly so
//! the submission flow can be driven without a mounted router.

use leptos_router::NavigateOptions;

pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// [`Navigator`] wrapping the closure returned by `use_navigate()`.
#[derive(Clone)]
pub struct RouterNavigator<F>(F);

impl<F> RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    pub fn new(navigate: F) -> Self {
        Self(navigate)
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate(&self, path: &str) {
        (self.0)(path, NavigateOptions::default());
    }
}
