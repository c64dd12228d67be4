//! # client
//!
//! Leptos + WASM frontend for the task list widget.
//!
//! On first load the app fetches an initial batch of tasks from a remote
//! API, caches it in `localStorage`, and serves every later interaction
//! (toggle completion, delete) from that cache without further network
//! calls. Browser-only glue is gated behind the `csr` feature so the
//! crate's logic tests run natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(crate::app::App);
}
