//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `fleet`, `ui`) so individual pages can
//! depend on small focused models provided through Leptos context.

pub mod auth;
pub mod fleet;
pub mod ui;
