//! Section Navigation
//!
//! Smooth-scrolls a section's anchor to the top of the viewport.

use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::section::Section;

/// Something that can bring an anchor into view
pub trait Viewport {
    /// Scroll the element with this id to the top. Returns false if it is absent.
    fn scroll_to_anchor(&self, anchor: &str) -> bool;
}

/// The browser window's document
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentViewport;

impl Viewport for DocumentViewport {
    fn scroll_to_anchor(&self, anchor: &str) -> bool {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            tracing::warn!("no document to scroll");
            return false;
        };
        let Some(element) = document.get_element_by_id(anchor) else {
            return false;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

/// Scroll to `section`; a missing anchor is a no-op
pub fn navigate(viewport: &impl Viewport, section: Section) -> bool {
    let found = viewport.scroll_to_anchor(section.anchor());
    if found {
        tracing::debug!(anchor = section.anchor(), "scrolled to section");
    } else {
        tracing::debug!(anchor = section.anchor(), "section anchor missing, ignoring");
    }
    found
}
