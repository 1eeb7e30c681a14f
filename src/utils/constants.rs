//! Application constants
//!
//! All timing, breakpoint, and layout constants for the splash sequence and
//! the landing page live here so the components only apply values.

// Splash timeline (milliseconds from mount)
pub const DIGIT_REVEAL_MS: u32 = 1_000;
pub const WORD_REVEAL_MS: u32 = 2_500;
pub const SPLASH_DONE_MS: u32 = 3_500;
pub const CONVERGE_DURATION_MS: u32 = 1_000;

/// How long the splash gate holds before swapping to the page.
pub const SPLASH_GATE_MS: u32 = SPLASH_DONE_MS;

// Splash lockup geometry, in viewBox units of the 700x100 SVG.
// Fixed offsets; the glyphs are never measured at runtime.
pub const ICON_X: f64 = 175.0;
pub const DIGIT_START_X: f64 = ICON_X + 70.0;
pub const DIGIT_TRAVEL: f64 = 210.0;
pub const WORD_START_X: f64 = ICON_X + 230.0;
pub const WORD_TRAVEL: f64 = -120.0;

// Splash gate assets, selected by viewport width at mount
pub const SPLASH_IMAGE_NARROW: &str = "assets/splash.webp";
pub const SPLASH_IMAGE_STANDARD: &str = "assets/splash2.webp";
pub const SPLASH_IMAGE_WIDE: &str = "assets/splash1.webp";
pub const SPLASH_BREAKPOINT_PX: f64 = 700.0;

// Navigation
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const NAV_SCROLLED_THRESHOLD_PX: f64 = 10.0;
pub const LOGIN_PATH: &str = "/login";

// Testimonial rotator
pub const TESTIMONIAL_INTERVAL_MS: u32 = 4_000;

// Keyboard scrolling (logical pixels)
pub const SCROLL_STEP_PX: f64 = 100.0;
pub const SCROLL_PAGE_PX: f64 = 400.0;
