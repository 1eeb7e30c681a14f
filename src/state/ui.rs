//! Landing page UI state
//!
//! All interactive state is view-local, owned by the component tree through
//! a Leptos context. Nothing here survives a page view.

use leptos::prelude::*;

use crate::content::TESTIMONIALS;
use crate::utils::scroll::next_testimonial;

/// Sections tracked for scroll highlighting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Features,
    Pricing,
    Contact,
}

impl Section {
    pub const TRACKED: [Section; 3] = [Section::Features, Section::Pricing, Section::Contact];

    /// DOM id of the section's anchor element.
    pub fn anchor_id(self) -> &'static str {
        match self {
            Section::Features => "features",
            Section::Pricing => "pricing",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Features => "Features",
            Section::Pricing => "Pricing",
            Section::Contact => "Contact",
        }
    }
}

/// Ephemeral UI state shared across the landing page components.
#[derive(Clone, Copy)]
pub struct UiContext {
    /// Mobile navigation panel open?
    pub menu_open: RwSignal<bool>,
    /// Section currently highlighted in the nav, if any.
    pub active_section: RwSignal<Option<Section>>,
    /// Scrolled past the nav backdrop threshold?
    pub scrolled: RwSignal<bool>,
    /// Index of the testimonial currently shown.
    pub active_testimonial: RwSignal<usize>,
}

impl UiContext {
    pub fn new() -> Self {
        Self {
            menu_open: RwSignal::new(false),
            active_section: RwSignal::new(None),
            scrolled: RwSignal::new(false),
            active_testimonial: RwSignal::new(0),
        }
    }

    pub fn toggle_menu(&self) {
        self.menu_open.update(|open| *open = !*open);
    }

    pub fn close_menu(&self) {
        self.menu_open.set(false);
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active_section.get() == Some(section)
    }

    /// One rotator tick: advance to the next testimonial, wrapping.
    pub fn advance_testimonial(&self) {
        self.active_testimonial
            .update(|index| *index = next_testimonial(*index, TESTIMONIALS.len()));
    }
}

impl Default for UiContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_ui_context() -> UiContext {
    let context = UiContext::new();
    provide_context(context);
    context
}

pub fn use_ui_context() -> UiContext {
    expect_context::<UiContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_toggle_is_an_involution() {
        let ui = UiContext::new();
        assert!(!ui.menu_open.get_untracked());
        ui.toggle_menu();
        assert!(ui.menu_open.get_untracked());
        ui.toggle_menu();
        assert!(!ui.menu_open.get_untracked());
    }

    #[test]
    fn close_menu_is_idempotent() {
        let ui = UiContext::new();
        ui.toggle_menu();
        ui.close_menu();
        ui.close_menu();
        assert!(!ui.menu_open.get_untracked());
    }

    #[test]
    fn rotator_wraps_over_the_three_testimonials() {
        let ui = UiContext::new();
        for _ in 0..TESTIMONIALS.len() {
            ui.advance_testimonial();
        }
        assert_eq!(ui.active_testimonial.get_untracked(), 0);
        ui.advance_testimonial();
        assert_eq!(ui.active_testimonial.get_untracked(), 1);
    }

    #[test]
    fn tracked_sections_have_stable_anchors() {
        for section in Section::TRACKED {
            assert!(!section.anchor_id().is_empty());
            assert!(!section.label().is_empty());
        }
        assert_eq!(Section::Pricing.anchor_id(), "pricing");
    }
}
