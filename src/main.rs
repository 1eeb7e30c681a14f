//! Switch6 landing page - browser entry point
//!
//! CSR-only Leptos app; Trunk serves `index.html`, which shows a loading
//! element until this module mounts the component tree.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod app;
mod components;
mod content;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Panic hook for readable error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Switch6 landing starting...");

    // The loading element is only needed until the WASM is running.
    hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the loading screen element
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        log::warn!("no document available");
        return;
    };

    match document.get_element_by_id("leptos-loading") {
        Some(loading_element) => {
            if let Some(html_element) = loading_element.dyn_ref::<HtmlElement>() {
                html_element.class_list().add_1("hidden").ok();
            }
            loading_element
                .set_attribute("style", "display: none !important;")
                .ok();
            log::debug!("loading screen hidden");
        }
        None => log::warn!("loading element not found"),
    }
}
