//! # newsletter-frontend
//!
//! Leptos + WASM browser front-end for the newsletter service. Public
//! visitors subscribe; administrators log in, publish newsletters and change
//! their password.
//!
//! The crate is thin by design: `net` issues REST calls and interprets their
//! outcome, `state` holds the shared session and message slots, and `pages` /
//! `components` render forms that drive them.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs console logging and mounts the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
