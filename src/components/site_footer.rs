//! Site Footer Component
//!
//! Copyright line followed by the social profile links.

use leptos::prelude::*;

use crate::components::ExternalLink;
use crate::content::PROFILE;

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer>
            {PROFILE.copyright()}
            {PROFILE
                .socials
                .iter()
                .map(|link| view! {
                    " | "
                    <ExternalLink href=link.href>{link.label}</ExternalLink>
                })
                .collect_view()}
        </footer>
    }
}
