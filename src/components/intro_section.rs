//! Intro Section Component

use leptos::prelude::*;

use crate::components::RevealSection;
use crate::content::PROFILE;
use crate::section::Section;

/// Profile photo and one-paragraph pitch
#[component]
pub fn IntroSection() -> impl IntoView {
    let photo = PROFILE.photo;

    view! {
        <RevealSection section=Section::Intro>
            <img class="profile-pic" src=photo.src alt=photo.alt loading="lazy" />
            <p class="intro">{PROFILE.intro}</p>
        </RevealSection>
    }
}
