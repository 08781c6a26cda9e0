//! Site Header Component
//!
//! Sticky header with the page title, section links and theme toggle.

use leptos::prelude::*;

use crate::content::PROFILE;
use crate::nav::{navigate, DocumentViewport};
use crate::section::Section;
use crate::store::{dispatch, use_page_store, PageEvent, PageStateStoreFields};

/// Header nav link that smooth-scrolls instead of jumping
#[component]
fn NavLink(section: Section) -> impl IntoView {
    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        navigate(&DocumentViewport, section);
    };

    view! {
        <a href=section.href() on:click=on_click>
            {section.nav_label()}
        </a>
    }
}

#[component]
pub fn SiteHeader() -> impl IntoView {
    let store = use_page_store();

    let toggle_theme = move |_| dispatch(&store, PageEvent::ToggleTheme);

    view! {
        <header>
            <h1>{PROFILE.name}</h1>
            <nav>
                {Section::NAVIGABLE
                    .into_iter()
                    .map(|section| view! { <NavLink section=section /> })
                    .collect_view()}
                <button class="toggle" on:click=toggle_theme>
                    {move || store.theme().get().toggle_label()}
                </button>
            </nav>
        </header>
    }
}
