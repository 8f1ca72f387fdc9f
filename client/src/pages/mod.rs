//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetch on mount, local form
//! state) and delegates chrome to `components::admin_layout`.

pub mod admin_dashboard;
pub mod alerts;
pub mod companies;
pub mod devices;
pub mod login;
pub mod maintenance;
pub mod not_found;
pub mod reports;
