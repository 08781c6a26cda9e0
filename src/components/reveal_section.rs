//! Reveal Section Component
//!
//! Section wrapper that fades in while at least part of it is on screen.

use leptos::html;
use leptos::prelude::*;
use scroll_reveal::use_visibility;

use crate::config::REVEAL_THRESHOLD;
use crate::section::Section;
use crate::store::{dispatch, use_page_store, PageEvent, PageStateStoreFields};

/// A page section with its heading. Tracked sections get the `visible`
/// class only while in view; the intro always has it.
#[component]
pub fn RevealSection(section: Section, children: Children) -> impl IntoView {
    let store = use_page_store();
    let node_ref = NodeRef::<html::Section>::new();

    if section.is_tracked() {
        use_visibility(node_ref, REVEAL_THRESHOLD, move |visible| {
            dispatch(&store, PageEvent::VisibilityChanged { section, visible });
        });
    }

    let revealed = move || store.visibility().get().is_revealed(section);

    view! {
        <section
            id=section.anchor()
            node_ref=node_ref
            class:visible=revealed
            aria-label=section.aria_label()
        >
            {section.heading().map(|heading| view! { <h2 class="section-title">{heading}</h2> })}
            {children()}
        </section>
    }
}
