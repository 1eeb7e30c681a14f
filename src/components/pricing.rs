//! Pricing section: the single plan card.

use leptos::prelude::*;

use crate::content::{PLAN_FEATURES, PLAN_NAME, PLAN_PRICE, PLAN_PRICE_NOTE};
use crate::services::navigation;
use crate::state::ui::Section;

#[component]
pub fn Pricing() -> impl IntoView {
    view! {
        <section id=Section::Pricing.anchor_id() class="py-20 px-4 md:px-8 bg-black/20">
            <div class="max-w-4xl mx-auto text-center">
                <h2 class="text-3xl md:text-4xl font-bold text-white mb-4">
                    "Simple, Transparent Pricing"
                </h2>
                <p class="text-gray-300 mb-16">
                    "Professional broadcasting at a fraction of the cost"
                </p>

                <div class="bg-white/10 backdrop-blur-sm border border-purple-400/50 rounded-2xl p-8 max-w-md mx-auto">
                    <h3 class="text-2xl font-bold text-white mb-2">{PLAN_NAME}</h3>
                    <div class="flex items-baseline justify-center mb-6">
                        <span class="text-5xl font-bold text-white">{PLAN_PRICE}</span>
                        <span class="text-gray-400 ml-2">"/month"</span>
                    </div>
                    <p class="text-gray-400 mb-6">{PLAN_PRICE_NOTE}</p>
                    <ul class="space-y-3 mb-8 text-left">
                        {PLAN_FEATURES
                            .iter()
                            .map(|item| {
                                view! {
                                    <li class="flex items-start">
                                        <span class="text-green-400 mr-2">"✓"</span>
                                        <span class="text-gray-200">{*item}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <button
                        class="w-full bg-purple-600 hover:bg-purple-700 text-white py-4 rounded-full"
                        on:click=move |_| navigation::go_to_login()
                    >
                        "Get Started"
                    </button>
                </div>
            </div>
        </section>
    }
}
