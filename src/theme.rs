//! Theme
//!
//! Light/dark mode, the colour palette for each mode and the page stylesheet
//! generated from it.

/// Page colour scheme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Label of the toggle button, naming the mode it switches to
    pub fn toggle_label(self) -> &'static str {
        match self {
            ThemeMode::Light => "🌙 Dark Mode",
            ThemeMode::Dark => "🌞 Light Mode",
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            ThemeMode::Light => &LIGHT,
            ThemeMode::Dark => &DARK,
        }
    }
}

/// Vertical offset a hidden section starts from
pub const REVEAL_OFFSET_PX: u32 = 25;
/// Fade-in duration for revealed sections
pub const REVEAL_DURATION_SECS: f32 = 0.6;

/// Every colour that changes with the theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub page_background: &'static str,
    pub text: &'static str,
    pub link: &'static str,
    pub link_hover: &'static str,
    pub header_background: &'static str,
    pub heading: &'static str,
    pub nav_hover: &'static str,
    /// Toggle button outline/text and profile photo border
    pub accent: &'static str,
    pub accent_contrast: &'static str,
    pub surface: &'static str,
    pub section_rule: &'static str,
    pub tag: &'static str,
    pub tag_hover: &'static str,
    pub project_description: &'static str,
    pub intro_text: &'static str,
    pub footer_text: &'static str,
    pub footer_border: &'static str,
    pub footer_link: &'static str,
}

pub const LIGHT: Palette = Palette {
    page_background: "#f9f7f7",
    text: "#333",
    link: "#0077cc",
    link_hover: "#004a99",
    header_background: "white",
    heading: "#2a2a72",
    nav_hover: "#cf6a87",
    accent: "#0077cc",
    accent_contrast: "white",
    surface: "white",
    section_rule: "#cf6a87",
    tag: "#cf6a87",
    tag_hover: "#ee739b",
    project_description: "#555",
    intro_text: "#444",
    footer_text: "#999",
    footer_border: "#ddd",
    footer_link: "#cf6a87",
};

pub const DARK: Palette = Palette {
    page_background: "#121212",
    text: "#eee",
    link: "#80c0ff",
    link_hover: "#c0e0ff",
    header_background: "#1e1e1e",
    heading: "#80c0ff",
    nav_hover: "#c0e0ff",
    accent: "#80c0ff",
    accent_contrast: "#121212",
    surface: "#1e1e1e",
    section_rule: "#80c0ff",
    tag: "#305e9e",
    tag_hover: "#5090ff",
    project_description: "#aaa",
    intro_text: "#ddd",
    footer_text: "#666",
    footer_border: "#444",
    footer_link: "#80c0ff",
};

/// Full page stylesheet for the given palette
pub fn stylesheet(palette: &Palette) -> String {
    let Palette {
        page_background,
        text,
        link,
        link_hover,
        header_background,
        heading,
        nav_hover,
        accent,
        accent_contrast,
        surface,
        section_rule,
        tag,
        tag_hover,
        project_description,
        intro_text,
        footer_text,
        footer_border,
        footer_link,
    } = *palette;
    let offset = REVEAL_OFFSET_PX;
    let duration = REVEAL_DURATION_SECS;

    format!(
        r#"@import url('https://fonts.googleapis.com/css2?family=Open+Sans:wght@300;600&family=Roboto+Mono&display=swap');

body {{
  margin: 0; padding: 0;
  font-family: 'Open Sans', sans-serif;
  background: {page_background};
  color: {text};
  transition: background 0.4s ease, color 0.4s ease;
}}
a {{
  color: {link};
  text-decoration: none;
  transition: color 0.3s ease;
}}
a:hover {{
  color: {link_hover};
  text-decoration: underline;
}}
header {{
  position: sticky;
  top: 0;
  background: {header_background};
  box-shadow: 0 2px 8px rgba(0,0,0,0.1);
  padding: 15px 20px;
  display: flex;
  align-items: center;
  justify-content: space-between;
  z-index: 999;
}}
header h1 {{
  font-size: 1.8rem;
  color: {heading};
  margin: 0;
}}
nav a {{
  margin-left: 20px;
  font-weight: 600;
  font-size: 1rem;
  cursor: pointer;
}}
nav a:hover {{
  color: {nav_hover};
}}
button.toggle {{
  background: none;
  border: 2px solid {accent};
  border-radius: 30px;
  padding: 6px 16px;
  font-weight: 600;
  color: {accent};
  cursor: pointer;
  transition: all 0.3s ease;
}}
button.toggle:hover {{
  background: {accent};
  color: {accent_contrast};
}}
main {{
  max-width: 900px;
  margin: 40px auto 80px;
  padding: 0 20px;
}}
section {{
  background: {surface};
  border-radius: 15px;
  padding: 30px 35px;
  margin-bottom: 40px;
  box-shadow: 0 3px 15px rgba(0,0,0,0.07);
  opacity: 0;
  transform: translateY({offset}px);
  transition: opacity {duration}s ease, transform {duration}s ease;
}}
section.visible {{
  opacity: 1;
  transform: translateY(0);
}}
section#intro {{
  text-align: center;
}}
h2.section-title {{
  margin-top: 0;
  margin-bottom: 20px;
  border-bottom: 3px solid {section_rule};
  color: {heading};
  font-size: 2rem;
  font-weight: 700;
  display: inline-block;
  padding-bottom: 6px;
}}
ul.skills-list {{
  list-style: none;
  display: flex;
  flex-wrap: wrap;
  gap: 15px;
  padding-left: 0;
}}
ul.skills-list li {{
  background: {tag};
  color: white;
  padding: 9px 18px;
  border-radius: 25px;
  font-weight: 600;
  font-size: 1rem;
  box-shadow: 0 3px 7px rgba(207,106,135,0.45);
  user-select: none;
  transition: background 0.3s ease;
}}
ul.skills-list li:hover {{
  background: {tag_hover};
}}
ul.projects-list {{
  list-style: none;
  padding-left: 0;
}}
ul.projects-list li {{
  margin-bottom: 24px;
}}
ul.projects-list a.project-link {{
  font-family: 'Roboto Mono', monospace;
  font-weight: 700;
  font-size: 1.2rem;
  color: {link};
}}
ul.projects-list a.project-link:hover {{
  color: {link_hover};
  text-decoration: underline;
}}
.project-desc {{
  margin-top: 6px;
  font-style: italic;
  color: {project_description};
  font-size: 1rem;
  max-width: 720px;
}}
.intro {{
  max-width: 720px;
  font-size: 1.15rem;
  line-height: 1.5;
  color: {intro_text};
  margin-bottom: 40px;
}}
footer {{
  text-align: center;
  padding: 30px 20px;
  color: {footer_text};
  font-size: 0.9rem;
  border-top: 1px solid {footer_border};
}}
footer a {{
  color: {footer_link};
  font-weight: 600;
}}
img.profile-pic {{
  width: 130px;
  height: 130px;
  border-radius: 50%;
  border: 3px solid {accent};
  object-fit: cover;
  margin-bottom: 15px;
  display: block;
  margin-left: auto;
  margin-right: auto;
  box-shadow: 0 4px 15px rgba(0,0,0,0.15);
}}
@media (max-width: 600px) {{
  ul.skills-list {{
    justify-content: center;
  }}
  nav a {{
    margin-left: 12px;
    font-size: 0.9rem;
  }}
}}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colours(p: &Palette) -> Vec<&'static str> {
        vec![
            p.page_background,
            p.text,
            p.link,
            p.link_hover,
            p.header_background,
            p.heading,
            p.nav_hover,
            p.accent,
            p.accent_contrast,
            p.surface,
            p.section_rule,
            p.tag,
            p.tag_hover,
            p.project_description,
            p.intro_text,
            p.footer_text,
            p.footer_border,
            p.footer_link,
        ]
    }

    #[test]
    fn test_default_mode_is_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    #[test]
    fn test_even_toggles_restore_palette() {
        for start in [ThemeMode::Light, ThemeMode::Dark] {
            let mut mode = start;
            for _ in 0..6 {
                mode = mode.toggled();
            }
            assert_eq!(mode.palette(), start.palette());
        }
    }

    #[test]
    fn test_first_toggle_goes_dark() {
        assert_eq!(ThemeMode::default().toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Light.toggled().palette(), &DARK);
    }

    #[test]
    fn test_every_slot_changes_between_modes() {
        for (light, dark) in colours(&LIGHT).into_iter().zip(colours(&DARK)) {
            assert_ne!(light, dark);
        }
    }

    #[test]
    fn test_toggle_label_names_target_mode() {
        assert_eq!(ThemeMode::Light.toggle_label(), "🌙 Dark Mode");
        assert_eq!(ThemeMode::Dark.toggle_label(), "🌞 Light Mode");
    }

    #[test]
    fn test_stylesheet_uses_palette() {
        let light = stylesheet(&LIGHT);
        let dark = stylesheet(&DARK);

        assert!(light.contains("background: #f9f7f7;"));
        assert!(dark.contains("background: #121212;"));
        assert!(!light.contains("#121212"));
        assert_ne!(light, dark);
    }

    #[test]
    fn test_stylesheet_reveal_transition() {
        let css = stylesheet(&LIGHT);
        assert!(css.contains("transform: translateY(25px);"));
        assert!(css.contains("transition: opacity 0.6s ease, transform 0.6s ease;"));
        assert!(css.contains("section.visible {\n  opacity: 1;"));
    }

    #[test]
    fn test_stylesheet_braces_balance() {
        let css = stylesheet(&DARK);
        assert_eq!(css.matches('{').count(), css.matches('}').count());
    }
}
