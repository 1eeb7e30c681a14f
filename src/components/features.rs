//! Features section: the card grid.

use leptos::prelude::*;

use crate::content::{Feature, FEATURES};
use crate::state::ui::Section;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id=Section::Features.anchor_id() class="py-20 px-4 md:px-8">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-3xl md:text-4xl font-bold text-center text-white mb-4">
                    "Everything You Need to Go Live"
                </h2>
                <p class="text-center text-gray-300 mb-16 max-w-2xl mx-auto">
                    "Professional broadcasting features that used to cost thousands, now in your pocket"
                </p>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {FEATURES
                        .iter()
                        .map(|feature| view! { <FeatureCard feature=feature/> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: &'static Feature) -> impl IntoView {
    view! {
        <div class="bg-white/10 backdrop-blur-sm border border-white/20 rounded-xl p-6 hover:bg-white/15 transition-all">
            <div class="w-12 h-12 rounded-lg bg-black/20 flex items-center justify-center mb-4">
                <span class=format!("text-2xl {}", feature.color)>{feature.icon}</span>
            </div>
            <h3 class="text-lg font-bold text-white mb-2">{feature.title}</h3>
            <p class="text-gray-300 text-sm">{feature.description}</p>
        </div>
    }
}
