//! Networking modules for the sign-in REST call.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP request, `error` classifies failures, and `types`
//! defines the wire schema shared with the authentication server.

pub mod api;
pub mod error;
pub mod types;
