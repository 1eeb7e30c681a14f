//! Stat displays: the single stat item and the global stats band.

use leptos::prelude::*;

use crate::content::GLOBAL_STATS;

#[component]
pub fn StatItem(
    value: &'static str,
    label: &'static str,
    #[prop(optional)] large: bool,
) -> impl IntoView {
    let value_class = if large {
        "font-bold text-white text-4xl"
    } else {
        "font-bold text-white text-2xl"
    };

    view! {
        <div class="py-2">
            <div class=value_class>{value}</div>
            <div class="text-gray-400 text-sm">{label}</div>
        </div>
    }
}

#[component]
pub fn StatsBand() -> impl IntoView {
    view! {
        <div class="py-16 bg-black/20">
            <div class="max-w-6xl mx-auto px-4 md:px-8">
                <h3 class="text-2xl md:text-3xl font-bold text-white text-center mb-12">
                    "Trusted by Sports Clubs Worldwide"
                </h3>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-8 text-center">
                    {GLOBAL_STATS
                        .iter()
                        .map(|stat| view! { <StatItem value=stat.value label=stat.label large=true/> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
