//! # client
//!
//! Leptos frontend for the notes application: login and register pages, the
//! dashboard shell, and the client half of the auth flow (token storage and
//! the auth context provider).
//!
//! Built with `ssr` when linked into the server and with `hydrate` for the
//! WASM bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
