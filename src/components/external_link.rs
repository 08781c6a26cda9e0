//! External Link Component
//!
//! Anchors that leave the site: always a new tab, never linked back to us.

use leptos::prelude::*;

/// `rel` for every outbound link; the opened page gets no `window.opener`
/// and no referrer.
pub const EXTERNAL_REL: &str = "noopener noreferrer";

/// Outbound link opened in a new browsing context
#[component]
pub fn ExternalLink(
    href: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <a href=href class=class target="_blank" rel=EXTERNAL_REL>
            {children()}
        </a>
    }
}
