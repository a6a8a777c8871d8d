//! # client
//!
//! Leptos + WASM frontend for the bike-rental admin application.
//!
//! This crate contains pages, components, application state, and the REST
//! client for the document-collection and auth APIs. Domain types and the
//! list-search-mutate logic live in the shared `fleet` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
