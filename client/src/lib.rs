//! # client
//!
//! Leptos + WASM chat UI for the document-aware assistant gateway.
//!
//! This crate contains the page, components, conversation and voice state,
//! and the HTTP helpers for `/api/chat` and `/api/parse-file`. Build with
//! the `csr` feature (e.g. via `trunk`) to mount in the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount [`app::App`] on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
