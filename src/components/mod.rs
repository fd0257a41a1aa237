//! Reusable view components shared by pages.

pub mod toast_container;
