//! About Section Component

use leptos::prelude::*;

use crate::components::RevealSection;
use crate::content::PROFILE;
use crate::section::Section;

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <RevealSection section=Section::About>
            <p>{PROFILE.about}</p>
        </RevealSection>
    }
}
