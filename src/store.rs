//! Page State Store
//!
//! The page's only mutable state: the theme and which tracked sections are
//! in view. Events go through [`PageState::apply`], which returns the next
//! snapshot; the reactive store is then updated field by field so only the
//! affected views re-render.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::section::Section;
use crate::theme::ThemeMode;

/// Reveal flags for the scroll-tracked sections
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionVisibility {
    pub skills: bool,
    pub projects: bool,
    pub about: bool,
}

impl SectionVisibility {
    /// Whether the section is rendered revealed. The intro always is.
    pub fn is_revealed(&self, section: Section) -> bool {
        match section {
            Section::Intro => true,
            Section::Skills => self.skills,
            Section::Projects => self.projects,
            Section::About => self.about,
        }
    }

    /// Copy with one section's flag replaced
    pub fn with(mut self, section: Section, visible: bool) -> Self {
        match section {
            Section::Intro => {}
            Section::Skills => self.skills = visible,
            Section::Projects => self.projects = visible,
            Section::About => self.about = visible,
        }
        self
    }
}

/// Things that can happen to the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    ToggleTheme,
    VisibilityChanged { section: Section, visible: bool },
}

/// Ephemeral UI state, reset on every load
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Store)]
pub struct PageState {
    pub theme: ThemeMode,
    pub visibility: SectionVisibility,
}

impl PageState {
    pub fn apply(&self, event: PageEvent) -> PageState {
        match event {
            PageEvent::ToggleTheme => PageState {
                theme: self.theme.toggled(),
                ..*self
            },
            PageEvent::VisibilityChanged { section, visible } => PageState {
                visibility: self.visibility.with(section, visible),
                ..*self
            },
        }
    }
}

/// Type alias for the store
pub type PageStore = Store<PageState>;

/// Get the page store from context
pub fn use_page_store() -> PageStore {
    expect_context::<PageStore>()
}

/// Run an event through the reducer and write back what changed
pub fn dispatch(store: &PageStore, event: PageEvent) {
    let current = PageState {
        theme: store.theme().get_untracked(),
        visibility: store.visibility().get_untracked(),
    };
    let next = current.apply(event);
    tracing::debug!(?event, theme = next.theme.as_str(), "page event");

    if next.theme != current.theme {
        *store.theme().write() = next.theme;
    }
    if next.visibility != current.visibility {
        *store.visibility().write() = next.visibility;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toggled(state: PageState, times: usize) -> PageState {
        (0..times).fold(state, |s, _| s.apply(PageEvent::ToggleTheme))
    }

    fn seen(section: Section, visible: bool) -> PageEvent {
        PageEvent::VisibilityChanged { section, visible }
    }

    #[test]
    fn test_initial_state() {
        let state = PageState::default();
        assert_eq!(state.theme, ThemeMode::Light);
        assert!(state.visibility.is_revealed(Section::Intro));
        for section in Section::NAVIGABLE {
            assert!(!state.visibility.is_revealed(section));
        }
    }

    #[test]
    fn test_even_toggles_round_trip() {
        let start = PageState::default();
        for times in [2, 4, 10] {
            assert_eq!(toggled(start, times), start);
        }
    }

    #[test]
    fn test_odd_toggles_from_default_are_dark() {
        for times in [1, 3, 7] {
            assert_eq!(toggled(PageState::default(), times).theme, ThemeMode::Dark);
        }
    }

    #[test]
    fn test_toggle_leaves_visibility_alone() {
        let state = PageState::default().apply(seen(Section::Projects, true));
        let next = state.apply(PageEvent::ToggleTheme);
        assert_eq!(next.visibility, state.visibility);
    }

    #[test]
    fn test_visibility_is_per_section() {
        let state = PageState::default().apply(seen(Section::Skills, true));
        assert!(state.visibility.is_revealed(Section::Skills));
        assert!(!state.visibility.is_revealed(Section::Projects));
        assert!(!state.visibility.is_revealed(Section::About));
        assert_eq!(state.theme, ThemeMode::Light);
    }

    #[test]
    fn test_visibility_toggles_both_ways() {
        let mut state = PageState::default();
        for _ in 0..2 {
            state = state.apply(seen(Section::About, true));
            assert!(state.visibility.is_revealed(Section::About));
            state = state.apply(seen(Section::About, false));
            assert!(!state.visibility.is_revealed(Section::About));
        }
    }

    #[test]
    fn test_intro_cannot_be_hidden() {
        let state = PageState::default().apply(seen(Section::Intro, false));
        assert!(state.visibility.is_revealed(Section::Intro));
        assert_eq!(state, PageState::default());
    }
}
