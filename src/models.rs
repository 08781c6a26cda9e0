//! Content Models
//!
//! Records behind the rendered page. All content is static.

/// A showcased project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    /// Display name, also the list key
    pub title: &'static str,
    /// External URL opened in a new tab
    pub link: &'static str,
    pub description: &'static str,
}

/// Outbound profile link in the footer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfilePhoto {
    /// Path relative to the site root
    pub src: &'static str,
    pub alt: &'static str,
}

/// Who the page is about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub intro: &'static str,
    pub about: &'static str,
    pub photo: ProfilePhoto,
    pub socials: &'static [SocialLink],
    pub copyright_year: u16,
}

impl Profile {
    /// Footer copyright notice
    pub fn copyright(&self) -> String {
        format!("© {} {}", self.copyright_year, self.name)
    }
}
