//! Scroll-synchronized state for the navigation bar.
//!
//! The engine is pure: the component feeds it scroll offsets and resolved
//! section positions, and it answers with the header treatment and the
//! active menu item. Keeping the DOM out of here is what makes the
//! highlight rules testable off-wasm.

use super::sections::{SectionId, SectionOffset};

/// Scroll offset past which the header swaps to its condensed treatment.
pub const SCROLL_CONDENSE_THRESHOLD_PX: f64 = 50.0;

/// Slack subtracted from a section's top before comparing against the scroll
/// offset, so a section counts as active slightly before its top edge
/// reaches the viewport top.
pub const SECTION_PROBE_OFFSET_PX: f64 = 100.0;

/// Gap kept between the viewport top and a scrolled-to section, leaving the
/// fixed header clear of the section heading.
pub const NAV_SCROLL_MARGIN_PX: f64 = 80.0;

/// Transient view state owned by the navbar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavEngine {
    pub menu_open: bool,
    pub condensed: bool,
    pub active: SectionId,
}

impl Default for NavEngine {
    fn default() -> Self {
        Self {
            menu_open: false,
            condensed: false,
            active: SectionId::Home,
        }
    }
}

impl NavEngine {
    /// Recompute the header state for a scroll position.
    ///
    /// `sections` must be in document order. The last entry whose probe line
    /// sits at or above `scroll_y` wins, so the closest preceding section is
    /// the one highlighted; no qualifying section means the viewport is
    /// above everything and Home is shown.
    pub fn handle_scroll(&mut self, scroll_y: f64, sections: &[SectionOffset]) {
        self.condensed = scroll_y > SCROLL_CONDENSE_THRESHOLD_PX;

        let mut current = SectionId::Home;
        for section in sections {
            if scroll_y >= section.top - SECTION_PROBE_OFFSET_PX {
                current = section.id;
            }
        }
        self.active = current;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Resolve a menu selection into a smooth-scroll destination.
    ///
    /// The mobile menu closes no matter what; the scroll only happens when
    /// the target section was actually found in the document.
    pub fn select_section(&mut self, section_top: Option<f64>) -> Option<f64> {
        self.menu_open = false;
        section_top.map(|top| top - NAV_SCROLL_MARGIN_PX)
    }
}
