//! Scroll interaction logic
//!
//! The section-highlight selection and the keyboard mapping are plain
//! functions so they can be tested without a browser.

use crate::state::ui::Section;
use crate::utils::constants::{SCROLL_PAGE_PX, SCROLL_STEP_PX};

/// Pick the active section for a given viewport midpoint.
///
/// Among the tracked sections whose top offset sits at or above the midpoint,
/// the one closest to the midpoint wins. Sections below the midpoint never
/// qualify; if nothing qualifies there is no active section.
pub fn active_section(section_tops: &[(Section, f64)], midpoint: f64) -> Option<Section> {
    let mut closest = None;
    let mut min_distance = f64::INFINITY;

    for &(section, top) in section_tops {
        if top <= midpoint {
            let distance = midpoint - top;
            if distance < min_distance {
                min_distance = distance;
                closest = Some(section);
            }
        }
    }

    closest
}

/// Map a keyboard key to a vertical scroll delta in logical pixels.
///
/// Only the four navigation keys are handled; everything else keeps the
/// browser's default behavior.
pub fn scroll_delta_for_key(key: &str) -> Option<f64> {
    match key {
        "ArrowDown" => Some(SCROLL_STEP_PX),
        "ArrowUp" => Some(-SCROLL_STEP_PX),
        "PageDown" => Some(SCROLL_PAGE_PX),
        "PageUp" => Some(-SCROLL_PAGE_PX),
        _ => None,
    }
}

/// Advance the testimonial rotator by one tick, wrapping at `count`.
pub fn next_testimonial(current: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    (current + 1) % count
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOPS: [(Section, f64); 3] = [
        (Section::Features, 800.0),
        (Section::Pricing, 2400.0),
        (Section::Contact, 3600.0),
    ];

    #[test]
    fn nothing_active_above_the_first_section() {
        assert_eq!(active_section(&TOPS, 500.0), None);
    }

    #[test]
    fn closest_section_at_or_above_midpoint_wins() {
        assert_eq!(active_section(&TOPS, 900.0), Some(Section::Features));
        assert_eq!(active_section(&TOPS, 2500.0), Some(Section::Pricing));
        assert_eq!(active_section(&TOPS, 9000.0), Some(Section::Contact));
    }

    #[test]
    fn section_top_exactly_at_midpoint_qualifies() {
        assert_eq!(active_section(&TOPS, 2400.0), Some(Section::Pricing));
    }

    #[test]
    fn arrow_keys_scroll_one_step() {
        assert_eq!(scroll_delta_for_key("ArrowDown"), Some(100.0));
        assert_eq!(scroll_delta_for_key("ArrowUp"), Some(-100.0));
    }

    #[test]
    fn page_keys_scroll_one_page() {
        assert_eq!(scroll_delta_for_key("PageDown"), Some(400.0));
        assert_eq!(scroll_delta_for_key("PageUp"), Some(-400.0));
    }

    #[test]
    fn other_keys_are_left_to_the_browser() {
        assert_eq!(scroll_delta_for_key("Enter"), None);
        assert_eq!(scroll_delta_for_key("ArrowLeft"), None);
        assert_eq!(scroll_delta_for_key(" "), None);
    }

    #[test]
    fn rotation_wraps_modulo_count() {
        assert_eq!(next_testimonial(0, 3), 1);
        assert_eq!(next_testimonial(2, 3), 0);

        let mut index = 0;
        for _ in 0..7 {
            index = next_testimonial(index, 3);
        }
        assert_eq!(index, 7 % 3);
    }
}
