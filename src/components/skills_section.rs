//! Skills Section Component

use leptos::prelude::*;

use crate::components::RevealSection;
use crate::content::SKILLS;
use crate::section::Section;

/// One tag per skill, in catalogue order
#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <RevealSection section=Section::Skills>
            <ul class="skills-list">
                {SKILLS.iter().map(|skill| view! { <li>{*skill}</li> }).collect_view()}
            </ul>
        </RevealSection>
    }
}
