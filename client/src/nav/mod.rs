//! Route table and the navigation guard that gates it.
//!
//! SYSTEM CONTEXT
//! ==============
//! `routes` is the single source of truth for paths and sidebar labels.
//! `guard` decides, before a route view renders, whether the transition
//! proceeds or is redirected. Both are plain data/functions so the Leptos
//! adapter in `components::route_guard` stays thin.

pub mod guard;
pub mod routes;
