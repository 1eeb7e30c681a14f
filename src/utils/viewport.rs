//! Viewport helpers
//!
//! Pure width/position calculations, plus thin wrappers over `web_sys::Window`
//! for the call sites that need live values.

use crate::utils::constants::{
    MOBILE_BREAKPOINT_PX, SPLASH_BREAKPOINT_PX, SPLASH_IMAGE_NARROW, SPLASH_IMAGE_STANDARD,
    SPLASH_IMAGE_WIDE,
};

/// Pick the splash gate asset for a viewport width. The choice is made once at
/// mount and held for the whole gate duration.
pub fn splash_image_for_width(width: f64) -> &'static str {
    if width < SPLASH_BREAKPOINT_PX {
        SPLASH_IMAGE_NARROW
    } else if width > SPLASH_BREAKPOINT_PX {
        SPLASH_IMAGE_WIDE
    } else {
        SPLASH_IMAGE_STANDARD
    }
}

pub fn is_mobile_width(width: f64) -> bool {
    width < MOBILE_BREAKPOINT_PX
}

/// Vertical midpoint of the visible viewport in document coordinates.
pub fn viewport_midpoint(scroll_y: f64, inner_height: f64) -> f64 {
    scroll_y + inner_height / 2.0
}

/// Current window inner width, if the browser exposes it.
pub fn window_inner_width() -> Option<f64> {
    let window = web_sys::window()?;
    window.inner_width().ok()?.as_f64()
}

/// Current window inner height, if the browser exposes it.
pub fn window_inner_height() -> Option<f64> {
    let window = web_sys::window()?;
    window.inner_height().ok()?.as_f64()
}

/// Current vertical scroll position.
pub fn window_scroll_y() -> Option<f64> {
    web_sys::window()?.scroll_y().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_viewports_get_the_narrow_asset() {
        assert_eq!(splash_image_for_width(320.0), SPLASH_IMAGE_NARROW);
        assert_eq!(splash_image_for_width(699.9), SPLASH_IMAGE_NARROW);
    }

    #[test]
    fn exact_breakpoint_gets_the_standard_asset() {
        assert_eq!(splash_image_for_width(700.0), SPLASH_IMAGE_STANDARD);
    }

    #[test]
    fn wide_viewports_get_the_wide_asset() {
        assert_eq!(splash_image_for_width(700.1), SPLASH_IMAGE_WIDE);
        assert_eq!(splash_image_for_width(1920.0), SPLASH_IMAGE_WIDE);
    }

    #[test]
    fn mobile_breakpoint_is_exclusive() {
        assert!(is_mobile_width(767.9));
        assert!(!is_mobile_width(768.0));
    }

    #[test]
    fn midpoint_is_half_the_viewport_below_the_scroll_offset() {
        assert_eq!(viewport_midpoint(0.0, 900.0), 450.0);
        assert_eq!(viewport_midpoint(1200.0, 800.0), 1600.0);
    }
}
