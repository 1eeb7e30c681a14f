//! Switch6 Landing - Leptos Frontend
//!
//! Root component: provides the UI state context and gates the page behind
//! the splash intro.

use leptos::prelude::*;

use crate::components::SplashGate;
use crate::pages::LandingPage;
use crate::state::ui::provide_ui_context;

#[component]
pub fn App() -> impl IntoView {
    provide_ui_context();

    Effect::new(move || {
        log::info!("landing app mounted");
    });

    view! {
        <SplashGate>
            <LandingPage/>
        </SplashGate>
    }
}
