//! Portfolio App
//!
//! Root component: owns the page store, renders the themed stylesheet and
//! lays out header, sections and footer.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AboutSection, IntroSection, ProjectsSection, SiteFooter, SiteHeader, SkillsSection};
use crate::nav::{navigate, DocumentViewport};
use crate::section::Section;
use crate::store::{PageState, PageStateStoreFields};
use crate::theme::stylesheet;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(PageState::default());
    provide_context(store);

    let styles = move || stylesheet(store.theme().get().palette());

    // Sections only exist once mounted, so a deep link like `#projects`
    // has to be followed by hand.
    Effect::new(move |_| {
        let hash = web_sys::window().and_then(|w| w.location().hash().ok()).unwrap_or_default();
        if let Some(section) = Section::from_anchor(&hash).filter(|s| s.is_tracked()) {
            navigate(&DocumentViewport, section);
        }
    });

    view! {
        <style>{styles}</style>
        <SiteHeader />
        <main>
            <IntroSection />
            <SkillsSection />
            <ProjectsSection />
            <AboutSection />
        </main>
        <SiteFooter />
    }
}
