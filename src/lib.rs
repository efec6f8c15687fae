//! # mentor-client
//!
//! Leptos + WASM frontend pieces for the mentor portal.
//!
//! This crate contains the schedule settings store, the student feedback
//! page, and typed REST clients for the task, feedback, mentor and session
//! resources. Browser-only behavior is gated behind the `csr` feature;
//! everything else builds and tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and mounts the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
