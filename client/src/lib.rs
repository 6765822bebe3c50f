//! # qurricular-client
//!
//! Leptos + WASM frontend for Qurricular data entry: upload a book, generate
//! exercises (optionally grounded in that book), save them, and ask questions
//! about the book. All heavy lifting happens in the exercise backend; this
//! crate renders forms, validates them, and shapes the REST calls.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered `App`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
