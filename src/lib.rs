pub mod api;
pub mod common;
pub mod config;
pub mod frontend;
pub mod layout;
pub mod routing;
pub mod services;
pub mod types;
#[cfg(feature = "ssr")]
pub mod web;

/// WASM hydration entry point
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // A second init only happens on hot reload.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(frontend::App);
}
