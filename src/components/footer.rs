//! Footer; doubles as the Contact scroll anchor.

use leptos::prelude::*;

use crate::state::ui::Section;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer id=Section::Contact.anchor_id() class="py-12 px-4 md:px-8 bg-black/30 text-center">
            <h3 class="text-xl font-bold text-white">"Switch6"</h3>
            <p class="text-gray-300 mt-2">"Professional Sports Broadcasting Made Simple"</p>
            <p class="text-gray-500 mt-6 text-sm">"© 2025 Switch6. All rights reserved."</p>
        </footer>
    }
}
