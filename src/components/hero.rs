//! Hero section
//!
//! Headline, call-to-action pair, and the hero stat trio, over a backdrop of
//! slowly drifting decorative circles. The circles are plain DOM nodes
//! seeded after mount with randomized animation delays.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;

use crate::components::stats::StatItem;
use crate::content::HERO_STATS;
use crate::services::navigation;

const CIRCLE_POSITIONS: [&str; 6] = [
    "top: 10%; left: 5%;",
    "top: 20%; right: 10%;",
    "bottom: 25%; left: 15%;",
    "bottom: 20%; right: 8%;",
    "top: 40%; left: 25%;",
    "top: 50%; right: 20%;",
];

#[component]
pub fn Hero() -> impl IntoView {
    // Seed the backdrop once the section is in the DOM.
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(100).await;

        let backdrop = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id("hero-backdrop"));

        if let Some(element) = backdrop {
            if let Some(container) = element.dyn_ref::<HtmlElement>() {
                seed_circles(container);
            }
        }
    });

    view! {
        <section class="relative h-screen flex items-center justify-center overflow-hidden">
            <div id="hero-backdrop" class="absolute inset-0 pointer-events-none"></div>

            <div class="text-center max-w-4xl mx-auto px-4 hero-enter">
                <h1 class="text-4xl md:text-6xl font-bold text-white leading-tight mb-6">
                    "Transform Your Sports Broadcasting"
                </h1>
                <p class="text-xl text-gray-300 mb-10 max-w-3xl mx-auto">
                    "Turn any Android phone into a professional live streaming studio. \
                     Broadcast your matches with cinematic quality, professional overlays, \
                     and seamless multi-camera switching."
                </p>
                <div class="flex flex-col sm:flex-row justify-center gap-4 mb-12">
                    <button
                        class="bg-purple-600 hover:bg-purple-700 text-white px-8 py-4 text-lg rounded-full flex items-center justify-center"
                        on:click=move |_| navigation::go_to_login()
                    >
                        "Get Started"
                        <span class="ml-2">"→"</span>
                    </button>
                    <button class="border border-white/50 text-white hover:bg-white/10 px-8 py-4 text-lg rounded-full">
                        "Watch Demo"
                    </button>
                </div>
                <div class="grid grid-cols-1 sm:grid-cols-3 gap-6 max-w-2xl mx-auto">
                    {HERO_STATS
                        .iter()
                        .map(|stat| view! { <StatItem value=stat.value label=stat.label/> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

fn seed_circles(container: &HtmlElement) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };

    for (index, position) in CIRCLE_POSITIONS.iter().enumerate() {
        let circle = match document.create_element("div") {
            Ok(element) => element,
            Err(err) => {
                log::warn!("hero circle not created: {:?}", err);
                return;
            }
        };

        circle.set_class_name("floating-circle");

        let duration = 6 + index;
        let delay = js_sys::Math::random() * 2.0;
        circle
            .set_attribute(
                "style",
                &format!("{position} animation-duration: {duration}s; animation-delay: {delay:.2}s;"),
            )
            .ok();

        if container.append_child(&circle).is_err() {
            log::warn!("hero circle not attached");
            return;
        }
    }
}
