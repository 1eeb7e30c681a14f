//! Navigation bar
//!
//! Fixed top bar with the brand, scroll-anchor nav items, and the login
//! call-to-action. Below the mobile breakpoint the items collapse into a
//! toggleable panel; picking an item closes the panel and scrolls to the
//! section.

use leptos::prelude::*;

use crate::services::navigation;
use crate::state::ui::{use_ui_context, Section};

#[component]
pub fn Navbar(#[prop(into)] is_mobile: Signal<bool>) -> impl IntoView {
    let ui = use_ui_context();

    let bar_class = move || {
        format!(
            "fixed top-0 left-0 right-0 z-50 py-3 backdrop-blur-md {}",
            if ui.scrolled.get() { "bg-black/70" } else { "bg-transparent" }
        )
    };

    view! {
        <nav class=bar_class>
            <div class="container mx-auto px-4 md:px-8 flex justify-between items-center">
                <h1 class="text-xl md:text-2xl font-bold text-white">"Switch6"</h1>

                <Show
                    when=move || !is_mobile.get()
                    fallback=move || {
                        view! {
                            <button
                                class="text-white text-2xl"
                                on:click=move |_| ui.toggle_menu()
                            >
                                {move || if ui.menu_open.get() { "✕" } else { "☰" }}
                            </button>
                        }
                    }
                >
                    <div class="flex items-center space-x-6">
                        <NavButton section=Section::Features/>
                        <NavButton section=Section::Pricing/>
                        <NavButton section=Section::Contact/>
                        <GetStartedButton/>
                    </div>
                </Show>
            </div>
        </nav>

        // Mobile panel
        <Show when=move || is_mobile.get() && ui.menu_open.get()>
            <div class="fixed top-16 right-4 z-40 bg-black/80 backdrop-blur-lg border border-white/30 rounded-lg p-4">
                <div class="flex flex-col space-y-4">
                    <NavButton section=Section::Features/>
                    <NavButton section=Section::Pricing/>
                    <NavButton section=Section::Contact/>
                    <GetStartedButton/>
                </div>
            </div>
        </Show>
    }
}

/// A nav item: highlights while its section is active, scrolls to the anchor
/// on click, and closes the mobile panel.
#[component]
fn NavButton(section: Section) -> impl IntoView {
    let ui = use_ui_context();

    let class = move || {
        format!(
            "text-sm font-medium transition-colors {}",
            if ui.is_active(section) {
                "text-amber-400"
            } else {
                "text-white/90 hover:text-white"
            }
        )
    };

    view! {
        <button
            class=class
            on:click=move |_| {
                ui.close_menu();
                navigation::scroll_to_anchor(section.anchor_id());
            }
        >
            {section.label()}
        </button>
    }
}

#[component]
fn GetStartedButton() -> impl IntoView {
    view! {
        <button
            class="bg-purple-600 hover:bg-purple-700 text-white px-4 py-2 rounded-md text-sm font-medium"
            on:click=move |_| navigation::go_to_login()
        >
            "Get Started"
        </button>
    }
}
