//! erm.ai Web Frontend
//!
//! Leptos-based WASM frontend serving both landing pages.

mod api;
mod app;
mod components;
mod logging;
mod pages;
mod viewport;

pub use app::App;

use erm_core::LogConfig;
use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    logging::init(&LogConfig::from_build_env());
    leptos::mount::mount_to_body(App);
}
