//! KAVVI CRM - marketing landing page
//!
//! A server-rendered, hydrated landing page built with Leptos: static
//! marketing content, trial signup and demo scheduling forms, with UTM
//! attribution and analytics forwarded to the KAVVI backend.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
