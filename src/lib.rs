//! # signin-ui
//!
//! Leptos + WASM sign-in page for the web application.
//!
//! This crate contains the sign-in page, the routing shell around it, the
//! session and notification state it writes to, and the REST helper for the
//! remote sign-in endpoint. Token issuance and validation live on the server.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
