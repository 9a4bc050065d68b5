//! Herodex — a browser client for a hero catalogue.
//!
//! ARCHITECTURE
//! ============
//! `flow` holds the orchestration core (guard, login, detail, edit) behind
//! service traits so it is testable without a browser. `net` owns the REST
//! boundary, `state` owns route-scoped state, and `pages`/`components` are
//! the Leptos rendering layer wired to the flows.

pub mod app;
pub mod components;
pub mod flow;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: mount the application into the existing document body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
