//! Landing page shell
//!
//! Composes the static sections and owns the page-level interactions:
//! scroll-driven section highlighting (batched through rAF), the testimonial
//! rotator, keyboard scrolling, and the responsive-nav breakpoint. Every
//! listener and timer registered here is released in `on_cleanup`.

use std::time::Duration;

use leptos::ev;
use leptos::leptos_dom::helpers::{
    request_animation_frame, set_interval_with_handle, window_event_listener,
};
use leptos::prelude::*;

use crate::components::{
    CallToAction, Features, Footer, Hero, Navbar, Pricing, StatsBand, Testimonials,
};
use crate::services::navigation;
use crate::state::ui::{use_ui_context, Section, UiContext};
use crate::utils::constants::{NAV_SCROLLED_THRESHOLD_PX, TESTIMONIAL_INTERVAL_MS};
use crate::utils::scroll::{active_section, scroll_delta_for_key};
use crate::utils::viewport::{
    is_mobile_width, viewport_midpoint, window_inner_height, window_inner_width, window_scroll_y,
};

/// Re-derive the scroll-dependent UI state from the live layout.
fn recompute_scroll_state(ui: UiContext) {
    let scroll_y = window_scroll_y().unwrap_or(0.0);
    let midpoint = viewport_midpoint(scroll_y, window_inner_height().unwrap_or(0.0));

    let section_tops: Vec<(Section, f64)> = Section::TRACKED
        .iter()
        .filter_map(|&section| {
            navigation::element_offset_top(section.anchor_id()).map(|top| (section, top))
        })
        .collect();

    ui.active_section.set(active_section(&section_tops, midpoint));
    ui.scrolled.set(scroll_y > NAV_SCROLLED_THRESHOLD_PX);
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let ui = use_ui_context();

    let (is_mobile, set_is_mobile) = signal(
        window_inner_width().map(is_mobile_width).unwrap_or(false),
    );

    // Initial highlight once the sections are laid out.
    Effect::new(move || recompute_scroll_state(ui));

    // Scroll recomputation is batched through requestAnimationFrame so a
    // burst of scroll events costs one layout read per frame.
    let raf_pending = StoredValue::new(false);
    let scroll_handle = window_event_listener(ev::scroll, move |_| {
        if raf_pending.get_value() {
            return;
        }
        raf_pending.set_value(true);
        request_animation_frame(move || {
            raf_pending.set_value(false);
            recompute_scroll_state(ui);
        });
    });

    let keydown_handle = window_event_listener(ev::keydown, move |event| {
        if let Some(delta) = scroll_delta_for_key(&event.key()) {
            event.prevent_default();
            navigation::scroll_window_by(delta);
        }
    });

    let resize_handle = window_event_listener(ev::resize, move |_| {
        if let Some(width) = window_inner_width() {
            set_is_mobile.set(is_mobile_width(width));
        }
    });

    // Rotator runs for the whole page lifetime; no pause on hover.
    let rotation = set_interval_with_handle(
        move || ui.advance_testimonial(),
        Duration::from_millis(u64::from(TESTIMONIAL_INTERVAL_MS)),
    )
    .map_err(|err| log::warn!("testimonial rotator not scheduled: {:?}", err))
    .ok();

    on_cleanup(move || {
        scroll_handle.remove();
        keydown_handle.remove();
        resize_handle.remove();
        if let Some(handle) = rotation {
            handle.clear();
        }
    });

    view! {
        <div
            class="relative min-h-screen overflow-x-hidden"
            style="background: linear-gradient(135deg, #2C2C2C 0%, #1A1A1A 50%, #0D0D0D 100%);"
        >
            <Navbar is_mobile=is_mobile/>

            <div class="pt-20">
                <Hero/>
                <Features/>
                <StatsBand/>
                <Testimonials/>
                <Pricing/>
                <CallToAction/>
                <Footer/>
            </div>
        </div>
    }
}
