#![allow(non_snake_case)]

pub mod app;
#[cfg(feature = "hydrate")]
pub mod browser;
pub mod components;

pub use app::{shell, App};

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    leptos::mount::hydrate_body(App);
}
