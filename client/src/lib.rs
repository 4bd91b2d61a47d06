//! # client
//!
//! Leptos + WASM front end for the matchmaking site's two interactive pages:
//! the real-time chat and the questionnaire.
//!
//! The crate mounts onto server-rendered host pages. Each page controller
//! reads its configuration from `data-*` attributes on its container and
//! attaches only if that container exists. Controller logic lives in `state`
//! as plain Rust and is tested on the host; browser glue is compiled with the
//! `csr` feature.

#[cfg(feature = "csr")]
pub mod app;
#[cfg(feature = "csr")]
pub mod components;
pub mod consts;
pub mod error;
pub mod net;
#[cfg(feature = "csr")]
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount whichever pages are present.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    app::mount_pages();
}
