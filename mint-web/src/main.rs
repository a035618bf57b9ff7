//! Soroban NFTs minting front-end
//!
//! Client-side rendered Leptos app. Connects a Freighter wallet and walks
//! the user toward minting one of a small set of NFTs on a Soroban network.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod services;
pub mod state;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Panic hook for readable stack traces in the browser console
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Soroban NFTs app starting");

    // Hide the static loading screen as soon as the WASM module runs
    hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the loading screen element shipped in index.html.
fn hide_loading_screen() {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(d) => d,
        None => {
            log::warn!("no document available; cannot hide loading screen");
            return;
        }
    };

    if let Some(loading_element) = document.get_element_by_id("leptos-loading") {
        if let Some(html_element) = loading_element.dyn_ref::<HtmlElement>() {
            if let Err(e) = html_element.class_list().add_1("hidden") {
                web_sys::console::error_1(&format!("failed to hide loading screen: {:?}", e).into());
            }
        }
        // display:none as backup in case the class is missing from the stylesheet
        loading_element
            .set_attribute("style", "display: none !important;")
            .ok();
        log::info!("loading screen hidden");
    }
}
