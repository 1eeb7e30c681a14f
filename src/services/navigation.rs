//! Browser navigation side effects
//!
//! The only outbound interface of the page: full-page navigation to the
//! login path, plus smooth-scrolling helpers for the nav and keyboard
//! handlers. Everything degrades to a no-op without a window (tests).

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};

use crate::utils::constants::LOGIN_PATH;

/// Navigate the whole page to `/login`. Not an API call.
pub fn go_to_login() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if window.location().set_href(LOGIN_PATH).is_err() {
        log::warn!("navigation to {} failed", LOGIN_PATH);
    }
}

/// Smooth-scroll the viewport so the element with `id` is at the top.
pub fn scroll_to_anchor(id: &str) {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id));

    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => log::warn!("scroll target #{} not found", id),
    }
}

/// Smooth-scroll the viewport vertically by `delta_y` logical pixels.
pub fn scroll_window_by(delta_y: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(delta_y);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_by_with_scroll_to_options(&options);
}

/// Document-relative top offset of the element with `id`, if it is laid out.
pub fn element_offset_top(id: &str) -> Option<f64> {
    let element = web_sys::window()?.document()?.get_element_by_id(id)?;
    let html_element = element.dyn_ref::<HtmlElement>()?;
    Some(html_element.offset_top() as f64)
}
