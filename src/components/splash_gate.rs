//! Splash gate
//!
//! Holds the page behind an intro screen for a fixed 3500ms, then swaps to
//! the real content. The backdrop raster is chosen once at mount from the
//! viewport width and held for the whole gate; the animated lockup plays on
//! top of it.

use std::time::Duration;

use leptos::leptos_dom::helpers::set_timeout_with_handle;
use leptos::prelude::*;

use crate::components::Splash;
use crate::utils::constants::SPLASH_GATE_MS;
use crate::utils::viewport::{splash_image_for_width, window_inner_width};

#[component]
pub fn SplashGate(children: ChildrenFn) -> impl IntoView {
    let (gate_open, set_gate_open) = signal(false);

    // Width is read once; the asset choice stays stable for the gate duration.
    let image = splash_image_for_width(window_inner_width().unwrap_or(0.0));
    log::debug!("splash gate using {}", image);

    match set_timeout_with_handle(
        move || set_gate_open.set(true),
        Duration::from_millis(u64::from(SPLASH_GATE_MS)),
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => {
            // Without a timer the gate would never open; skip the splash.
            log::warn!("splash gate timer not scheduled, skipping splash: {:?}", err);
            set_gate_open.set(true);
        }
    }

    view! {
        <Show
            when=move || gate_open.get()
            fallback=move || {
                view! {
                    <div class="bg-black min-h-screen flex items-center justify-center overflow-hidden relative">
                        <img
                            src=image
                            alt="Splash"
                            class="absolute inset-0 w-full h-full object-contain opacity-40"
                            loading="eager"
                        />
                        <div class="relative w-full max-w-3xl px-4">
                            <Splash/>
                        </div>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
