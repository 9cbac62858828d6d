//! # atlas-web
//!
//! Leptos + WASM front end for the Atlas module registry: browsing and
//! searching modules, user profiles, starring, owner invitations, and API
//! token management.
//!
//! This crate contains pages, components, the session store, the route
//! table and guard, and the typed HTTP client for the registry API. The
//! registry server itself is a separate service reached over HTTP.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;
pub mod util;

/// WASM entry point: render the single-page app into `<body>`.
///
/// There is no server-rendered markup to hydrate; the browser builds the
/// whole view tree, so session-dependent UI reads `localStorage` directly.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
