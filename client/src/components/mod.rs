//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and the route gate while reading/writing
//! shared state from Leptos context providers.

pub mod admin_layout;
pub mod route_guard;
pub mod user_menu;
