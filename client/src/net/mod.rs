//! Networking modules for the back-office REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls (same-origin `/api/*`, forwarded upstream by
//! the server) and `types` defines the wire schema.

pub mod api;
pub mod types;
