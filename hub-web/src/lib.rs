//! LEAD Hub Landing Page
//!
//! Loading screen, then the Nutrition / Mindfulness menu, then the hand-off to `/auth`.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod services;
pub mod state;
pub mod utils;

use app::App;
use utils::constants::BOOT_LOADER_ID;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("LEAD Hub starting...");

    // The static placeholder in index.html only covers the WASM download
    hide_boot_loader();

    let config = config::load_config();
    leptos::mount::mount_to_body(move || view! { <App config=config/> });
}

/// Remove the pre-WASM placeholder from the host document
fn hide_boot_loader() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("No document available, cannot hide boot loader");
        return;
    };

    match document.get_element_by_id(BOOT_LOADER_ID) {
        Some(element) => {
            element.remove();
            log::debug!("Boot loader removed");
        }
        None => log::warn!("Boot loader element '{}' not found", BOOT_LOADER_ID),
    }
}
