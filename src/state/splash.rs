//! Splash choreography state machine
//!
//! The intro animation is modeled as an explicit phase machine keyed on
//! elapsed milliseconds, so the whole sequence can be exercised with a
//! virtual clock. The component layer only schedules the transition times
//! and applies the offsets computed here.
//!
//! Timeline: the icon fades in from t=0; the digit glyph appears at 1000ms;
//! at 2500ms the word glyph appears and both glyphs start converging into
//! the lockup over 1000ms; at 3500ms the sequence is done.

use crate::utils::constants::{
    DIGIT_REVEAL_MS, DIGIT_START_X, DIGIT_TRAVEL, SPLASH_DONE_MS, WORD_REVEAL_MS, WORD_START_X,
    WORD_TRAVEL,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SplashPhase {
    /// Clock not started.
    Idle,
    /// Icon fading in, glyphs hidden.
    IconShown,
    /// Digit glyph revealed.
    GlyphsRevealing,
    /// Word glyph revealed, both glyphs translating into the lockup.
    Converging,
    /// Sequence complete; all timers may be cancelled.
    Done,
}

impl SplashPhase {
    /// Phase for a given elapsed time since the sequence started.
    pub fn at(elapsed_ms: u32) -> Self {
        if elapsed_ms >= SPLASH_DONE_MS {
            SplashPhase::Done
        } else if elapsed_ms >= WORD_REVEAL_MS {
            SplashPhase::Converging
        } else if elapsed_ms >= DIGIT_REVEAL_MS {
            SplashPhase::GlyphsRevealing
        } else {
            SplashPhase::IconShown
        }
    }

    pub fn digit_visible(self) -> bool {
        self >= SplashPhase::GlyphsRevealing
    }

    pub fn word_visible(self) -> bool {
        self >= SplashPhase::Converging
    }

    /// Horizontal position of the digit glyph, in viewBox units.
    pub fn digit_x(self) -> f64 {
        if self >= SplashPhase::Converging {
            DIGIT_START_X + DIGIT_TRAVEL
        } else {
            DIGIT_START_X
        }
    }

    /// Horizontal position of the word glyph, in viewBox units.
    pub fn word_x(self) -> f64 {
        if self >= SplashPhase::Converging {
            WORD_START_X + WORD_TRAVEL
        } else {
            WORD_START_X
        }
    }
}

/// Monotone wrapper around [`SplashPhase`]: time only moves forward, so a
/// stale timer firing late can never regress the animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplashTimeline {
    phase: SplashPhase,
}

impl SplashTimeline {
    pub fn new() -> Self {
        Self {
            phase: SplashPhase::Idle,
        }
    }

    pub fn phase(&self) -> SplashPhase {
        self.phase
    }

    /// Advance the machine to the phase for `elapsed_ms`. Advancing to an
    /// earlier (or the same) phase is a no-op, which makes duplicate or
    /// out-of-order timer callbacks harmless.
    pub fn advance_to(&mut self, elapsed_ms: u32) -> SplashPhase {
        let next = SplashPhase::at(elapsed_ms);
        if next > self.phase {
            self.phase = next;
        }
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == SplashPhase::Done
    }
}

impl Default for SplashTimeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_follow_the_schedule() {
        assert_eq!(SplashPhase::at(0), SplashPhase::IconShown);
        assert_eq!(SplashPhase::at(999), SplashPhase::IconShown);
        assert_eq!(SplashPhase::at(1_000), SplashPhase::GlyphsRevealing);
        assert_eq!(SplashPhase::at(2_499), SplashPhase::GlyphsRevealing);
        assert_eq!(SplashPhase::at(2_500), SplashPhase::Converging);
        assert_eq!(SplashPhase::at(3_499), SplashPhase::Converging);
        assert_eq!(SplashPhase::at(3_500), SplashPhase::Done);
        assert_eq!(SplashPhase::at(u32::MAX), SplashPhase::Done);
    }

    #[test]
    fn glyph_visibility_tracks_the_phase() {
        assert!(!SplashPhase::IconShown.digit_visible());
        assert!(SplashPhase::GlyphsRevealing.digit_visible());
        assert!(!SplashPhase::GlyphsRevealing.word_visible());
        assert!(SplashPhase::Converging.word_visible());
    }

    #[test]
    fn glyphs_converge_with_fixed_offsets() {
        // Digit starts left of the word and they swap during convergence.
        let before = SplashPhase::GlyphsRevealing;
        let after = SplashPhase::Converging;
        assert_eq!(before.digit_x(), 245.0);
        assert_eq!(before.word_x(), 405.0);
        assert_eq!(after.digit_x(), 455.0);
        assert_eq!(after.word_x(), 285.0);
        // Positions are final once converging; Done changes nothing.
        assert_eq!(SplashPhase::Done.digit_x(), after.digit_x());
        assert_eq!(SplashPhase::Done.word_x(), after.word_x());
    }

    #[test]
    fn timeline_starts_idle_and_advances_in_order() {
        let mut timeline = SplashTimeline::new();
        assert_eq!(timeline.phase(), SplashPhase::Idle);
        assert_eq!(timeline.advance_to(0), SplashPhase::IconShown);
        assert_eq!(timeline.advance_to(1_000), SplashPhase::GlyphsRevealing);
        assert_eq!(timeline.advance_to(2_500), SplashPhase::Converging);
        assert_eq!(timeline.advance_to(3_500), SplashPhase::Done);
        assert!(timeline.is_done());
    }

    #[test]
    fn late_or_duplicate_timers_never_regress_the_phase() {
        let mut timeline = SplashTimeline::new();
        timeline.advance_to(3_500);
        // A timer scheduled for an earlier transition firing late is ignored.
        assert_eq!(timeline.advance_to(1_000), SplashPhase::Done);
        assert_eq!(timeline.advance_to(3_500), SplashPhase::Done);
    }
}
