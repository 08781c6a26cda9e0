//! Page Sections
//!
//! Identifiers for the four main sections and their anchors and labels.

/// A section of the page body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Intro,
    Skills,
    Projects,
    About,
}

impl Section {
    /// Sections in document order
    pub const ALL: [Section; 4] = [Section::Intro, Section::Skills, Section::Projects, Section::About];

    /// Sections reachable from the header nav, in link order
    pub const NAVIGABLE: [Section; 3] = [Section::Skills, Section::Projects, Section::About];

    /// DOM id of the section element
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Intro => "intro",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::About => "about",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }

    /// Text of the header nav link
    pub fn nav_label(self) -> &'static str {
        match self {
            Section::Intro => "Intro",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::About => "About",
        }
    }

    /// Visible heading; the intro has none
    pub fn heading(self) -> Option<&'static str> {
        match self {
            Section::Intro => None,
            Section::Skills => Some("Skills & Technologies"),
            Section::Projects => Some("Projects Showcase"),
            Section::About => Some("About Me"),
        }
    }

    pub fn aria_label(self) -> Option<&'static str> {
        match self {
            Section::Intro => None,
            Section::Skills => Some("Skills and Technologies"),
            Section::Projects => Some("Projects Showcase"),
            Section::About => Some("About Me"),
        }
    }

    /// Whether the section fades in on scroll (the intro is always shown)
    pub fn is_tracked(self) -> bool {
        !matches!(self, Section::Intro)
    }

    pub fn from_anchor(anchor: &str) -> Option<Section> {
        let anchor = anchor.strip_prefix('#').unwrap_or(anchor);
        Section::ALL.into_iter().find(|s| s.anchor() == anchor)
    }
}
