//! # storefront
//!
//! Leptos + WASM frontend for the Farmbox farm-to-door grocery service.
//!
//! This crate contains the marketing pages, the demo role switcher, the
//! keyed local state store that wraps browser `localStorage`, and the
//! security-admin request helpers. The `farmbox` server crate renders it
//! with the `ssr` feature; the browser bundle is built with `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod storage;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
