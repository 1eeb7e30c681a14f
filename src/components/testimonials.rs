//! Testimonials section
//!
//! Shows one testimonial at a time; the active index lives in the UI context
//! and is advanced by the page-level rotator interval.

use leptos::prelude::*;

use crate::content::TESTIMONIALS;
use crate::state::ui::use_ui_context;

#[component]
pub fn Testimonials() -> impl IntoView {
    let ui = use_ui_context();

    view! {
        <section class="py-20 px-4 md:px-8">
            <div class="max-w-4xl mx-auto text-center">
                <h2 class="text-3xl md:text-4xl font-bold text-white mb-16">
                    "What Our Clients Say"
                </h2>

                <div class="mb-8">
                    {move || {
                        // Index is always in range: the rotator wraps modulo len.
                        let testimonial = &TESTIMONIALS[ui.active_testimonial.get() % TESTIMONIALS.len()];
                        view! {
                            <div class="bg-white/10 backdrop-blur-sm border border-white/20 rounded-xl p-6">
                                <div class="flex justify-center mb-4 text-amber-400">
                                    {"★".repeat(testimonial.rating as usize)}
                                </div>
                                <p class="text-gray-200 italic mb-6">
                                    "\u{201c}" {testimonial.text} "\u{201d}"
                                </p>
                                <div>
                                    <div class="font-bold text-white">{testimonial.name}</div>
                                    <div class="text-gray-400">{testimonial.club}</div>
                                </div>
                            </div>
                        }
                    }}
                </div>

                <div class="flex justify-center space-x-2">
                    {TESTIMONIALS
                        .iter()
                        .enumerate()
                        .map(|(index, _)| {
                            view! {
                                <div class=move || {
                                    format!(
                                        "w-2 h-2 rounded-full {}",
                                        if index == ui.active_testimonial.get() {
                                            "bg-white"
                                        } else {
                                            "bg-white/40"
                                        },
                                    )
                                }></div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
