//! # client
//!
//! Leptos + WASM frontend for the login demo: an email/password login page,
//! a guarded dashboard, and the in-memory session that gates navigation.
//!
//! The same crate is rendered on the server (`ssr`) and hydrated in the
//! browser (`hydrate`). Everything outside `app` and `pages` is plain Rust
//! and runs in native unit tests.

pub mod app;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating app");
    leptos::mount::hydrate_body(app::App);
}
