//! Projects Section Component

use leptos::prelude::*;

use crate::components::{ExternalLink, RevealSection};
use crate::content::PROJECTS;
use crate::models::Project;
use crate::section::Section;

#[component]
fn ProjectEntry(project: Project) -> impl IntoView {
    view! {
        <li>
            <ExternalLink href=project.link class="project-link">
                {project.title}
            </ExternalLink>
            <p class="project-desc">{project.description}</p>
        </li>
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <RevealSection section=Section::Projects>
            <ul class="projects-list">
                {PROJECTS.iter().map(|project| view! { <ProjectEntry project=*project /> }).collect_view()}
            </ul>
        </RevealSection>
    }
}
