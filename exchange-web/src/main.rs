//! Crypto Exchange PWA
//!
//! Browser entry point: panic hook, logger, then the Leptos app.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;
use utils::constants::LOADING_ELEMENT_ID;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Crypto Exchange starting...");

    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the splash element from `index.html`.
pub(crate) fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document available");
        return;
    };
    let Some(element) = document.get_element_by_id(LOADING_ELEMENT_ID) else {
        return;
    };
    if let Some(html_element) = element.dyn_ref::<HtmlElement>() {
        if let Err(e) = html_element.class_list().add_1("hidden") {
            log::warn!("Could not hide loading screen: {:?}", e);
        }
    }
}
