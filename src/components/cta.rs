//! Closing call-to-action section.

use leptos::prelude::*;

use crate::services::navigation;

#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section class="py-20 px-4 md:px-8">
            <div class="max-w-3xl mx-auto text-center">
                <h2 class="text-3xl md:text-4xl font-bold text-white mb-4">
                    "Ready to Transform Your Sports Broadcasting?"
                </h2>
                <p class="text-gray-300 mb-8">
                    "Join thousands of clubs already streaming professionally with Switch6"
                </p>
                <button
                    class="bg-purple-600 hover:bg-purple-700 text-white px-8 py-4 text-lg rounded-full"
                    on:click=move |_| navigation::go_to_login()
                >
                    "Get Started"
                </button>
                <p class="text-gray-400 mt-4 text-sm">
                    "No setup fees • Cancel anytime • 24/7 support"
                </p>
            </div>
        </section>
    }
}
