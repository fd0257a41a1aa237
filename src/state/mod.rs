//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`signin_form`, `session`, `notify`) so the page
//! and components depend on small focused models.

pub mod notify;
pub mod session;
pub mod signin_form;
