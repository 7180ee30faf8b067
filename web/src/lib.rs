//! # web
//!
//! Leptos + WASM front end for submitting and browsing complaints.
//!
//! This crate contains the page, components, reactive state actions and the
//! `gloo-net` REST helpers. The lifecycle rules themselves live in the
//! `lifecycle` crate and are shared with the native client.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: install browser logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
