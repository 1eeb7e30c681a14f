//! Splash lockup animation
//!
//! SVG choreography for the Switch6 lockup: the chevron icon fades in, the
//! digit glyph follows, then the word glyph appears while both glyphs slide
//! into their final positions. The sequence is driven by the phase machine
//! in [`crate::state::splash`]; this component only schedules the transition
//! times and renders the phase.

use std::time::Duration;

use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use leptos::prelude::*;

use crate::state::splash::SplashTimeline;
use crate::utils::constants::{
    DIGIT_REVEAL_MS, DIGIT_START_X, ICON_X, SPLASH_DONE_MS, WORD_REVEAL_MS, WORD_START_X,
};

/// Chevron polyline for the icon, in icon-local coordinates.
fn arrow_points() -> String {
    let rect_y = 20.0;
    let rect_size = 60.0;
    let center_x = rect_size / 2.0;
    let center_y = rect_y + rect_size / 2.0;
    let arrow_size = 22.0;
    let offset_x = 8.0;

    let left_x = center_x - arrow_size / 2.0 + offset_x;
    let top_y = center_y - arrow_size / 2.0;
    let bottom_y = center_y + arrow_size / 2.0;
    let right_x = center_x + arrow_size / 2.0;

    format!("{left_x},{top_y} {right_x},{center_y} {left_x},{bottom_y}")
}

fn glyph_style(visible: bool, translate_x: f64) -> String {
    format!(
        "opacity: {}; transform: translateX({}px); \
         transition: opacity 1s ease, transform 1s ease;",
        if visible { 1 } else { 0 },
        translate_x,
    )
}

#[component]
pub fn Splash() -> impl IntoView {
    let timeline = RwSignal::new(SplashTimeline::new());
    timeline.update(|t| {
        t.advance_to(0);
    });

    // One timer per transition. Each handle is cleared on teardown, so an
    // unmount before 3500ms leaves no callback that could touch the signal;
    // clearing an already-fired timer is a no-op.
    let mut handles: Vec<TimeoutHandle> = Vec::with_capacity(3);
    for elapsed_ms in [DIGIT_REVEAL_MS, WORD_REVEAL_MS, SPLASH_DONE_MS] {
        let scheduled = set_timeout_with_handle(
            move || {
                timeline.update(|t| {
                    t.advance_to(elapsed_ms);
                });
            },
            Duration::from_millis(u64::from(elapsed_ms)),
        );
        match scheduled {
            Ok(handle) => handles.push(handle),
            Err(err) => log::warn!("splash timer for t={}ms not scheduled: {:?}", elapsed_ms, err),
        }
    }
    on_cleanup(move || {
        for handle in handles {
            handle.clear();
        }
    });

    let phase = move || timeline.with(|t| t.phase());
    let digit_style = move || {
        let p = phase();
        glyph_style(p.digit_visible(), p.digit_x() - DIGIT_START_X)
    };
    let word_style = move || {
        let p = phase();
        glyph_style(p.word_visible(), p.word_x() - WORD_START_X)
    };

    view! {
        <svg viewBox="0 0 700 100" xmlns="http://www.w3.org/2000/svg" class="splash-lockup">
            // Icon: rounded square with a chevron, fades in from t=0
            <g class="splash-icon" transform=format!("translate({ICON_X},0)")>
                <rect
                    x="0"
                    y="20"
                    width="60"
                    height="60"
                    rx="12"
                    ry="12"
                    fill="black"
                    stroke="white"
                    stroke-width="10"
                />
                <polyline
                    points=arrow_points()
                    fill="none"
                    stroke="white"
                    stroke-width="10"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                />
            </g>

            <text
                x=DIGIT_START_X
                y="50"
                fill="white"
                stroke="white"
                font-family="'Poppins', sans-serif"
                font-size="60"
                font-weight="bold"
                dominant-baseline="central"
                style=digit_style
            >
                "6"
            </text>

            <text
                x=WORD_START_X
                y="50"
                fill="white"
                stroke="white"
                font-family="'Poppins', sans-serif"
                font-size="60"
                font-weight="bold"
                dominant-baseline="central"
                style=word_style
            >
                "Switch"
            </text>
        </svg>
    }
}

// Visibility sanity check lives with the machine; here we only make sure the
// chevron geometry stays inside the 60x60 icon box.
#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::splash::SplashPhase;

    #[test]
    fn chevron_fits_the_icon_box() {
        let points = arrow_points();
        assert_eq!(points, "27,39 41,50 27,61");
        for coordinate in points.split([' ', ',']) {
            let value: f64 = coordinate.parse().unwrap();
            assert!((0.0..=80.0).contains(&value));
        }
    }

    #[test]
    fn glyph_style_hides_then_shows() {
        assert!(glyph_style(false, 0.0).contains("opacity: 0"));
        let converged = glyph_style(true, 210.0);
        assert!(converged.contains("opacity: 1"));
        assert!(converged.contains("translateX(210px)"));
    }

    #[test]
    fn phase_offsets_feed_relative_translations() {
        let p = SplashPhase::Done;
        assert_eq!(p.digit_x() - DIGIT_START_X, 210.0);
        assert_eq!(p.word_x() - WORD_START_X, -120.0);
    }
}
