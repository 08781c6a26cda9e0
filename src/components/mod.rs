//! UI Components
//!
//! Leptos components making up the page.

mod external_link;
mod reveal_section;
mod site_header;
mod intro_section;
mod skills_section;
mod projects_section;
mod about_section;
mod site_footer;

pub use external_link::ExternalLink;
pub use reveal_section::RevealSection;
pub use site_header::SiteHeader;
pub use intro_section::IntroSection;
pub use skills_section::SkillsSection;
pub use projects_section::ProjectsSection;
pub use about_section::AboutSection;
pub use site_footer::SiteFooter;
