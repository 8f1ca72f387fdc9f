//! # client
//!
//! Leptos + WASM frontend for the Quantum Fleet administrative dashboard.
//!
//! This crate contains the route table and navigation guard, pages,
//! components, application state, REST types, and small browser utilities
//! (session marker storage, outside-click detection, dark mode).

pub mod app;
pub mod components;
pub mod nav;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
