//! View-level details that should be available on both wasm and native.
//!
//! Keeping these out of the wasm-only `web` module allows us to unit-test the
//! labels and tab attributes on the host.

use roadmap::content::EvidenceEntry;
use roadmap::model::{Icon, PageState, PhaseTab, Theme};

/// Separator between an evidence link and its note.
pub const NOTE_SEPARATOR: &str = " — ";

/// Class added to the document root while dark mode is on.
pub const DARK_CLASS: &str = "dark";

/// What the theme button shows. It offers the *other* theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeButton {
    pub icon: Icon,
    pub label: &'static str,
    pub title: &'static str,
}

impl ThemeButton {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => ThemeButton {
                icon: Icon::Moon,
                label: "Dark Mode",
                title: "Switch to dark mode",
            },
            Theme::Dark => ThemeButton {
                icon: Icon::Sun,
                label: "White Mode",
                title: "Switch to light mode",
            },
        }
    }
}

/// The note after an evidence link: separator and text, or nothing at all.
pub fn evidence_annotation(entry: &EvidenceEntry) -> Option<(&'static str, &str)> {
    entry.note.as_deref().map(|note| (NOTE_SEPARATOR, note))
}

/// How the document root presents a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootPresentation {
    /// Whether `<html>` carries [`DARK_CLASS`].
    pub dark_class: bool,
    /// Value of `data-theme`.
    pub data_theme: &'static str,
}

pub fn root_presentation(theme: Theme) -> RootPresentation {
    RootPresentation {
        dark_class: theme.is_dark(),
        data_theme: theme.as_attr(),
    }
}

pub fn trigger_class(tab: PhaseTab, state: &PageState) -> &'static str {
    if state.is_visible(tab) {
        "tabs-trigger active"
    } else {
        "tabs-trigger"
    }
}

pub fn aria_selected(tab: PhaseTab, state: &PageState) -> &'static str {
    if state.is_visible(tab) {
        "true"
    } else {
        "false"
    }
}

/// Roving tabindex: only the active trigger is in the tab order.
pub fn roving_tabindex(tab: PhaseTab, state: &PageState) -> &'static str {
    if state.is_visible(tab) {
        "0"
    } else {
        "-1"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadmap::content::content;

    #[test]
    fn initial_button_offers_dark_mode() {
        let state = PageState::default();
        let button = ThemeButton::for_theme(state.theme);
        assert_eq!(button.label, "Dark Mode");
        assert_eq!(button.icon, Icon::Moon);
    }

    #[test]
    fn toggle_flips_button_label() {
        let mut state = PageState::default();
        state.toggle_theme();
        let button = ThemeButton::for_theme(state.theme);
        assert_eq!(button.label, "White Mode");
        assert_eq!(button.icon, Icon::Sun);

        state.toggle_theme();
        assert_eq!(
            ThemeButton::for_theme(state.theme),
            ThemeButton::for_theme(Theme::Light)
        );
    }

    #[test]
    fn exactly_one_trigger_is_selected() {
        for &active in PhaseTab::all() {
            let mut state = PageState::default();
            state.select_tab(active);

            let selected: Vec<PhaseTab> = PhaseTab::all()
                .iter()
                .copied()
                .filter(|&t| aria_selected(t, &state) == "true")
                .collect();
            assert_eq!(selected, vec![active]);

            let focusable = PhaseTab::all()
                .iter()
                .filter(|&&t| roving_tabindex(t, &state) == "0")
                .count();
            assert_eq!(focusable, 1);

            assert!(trigger_class(active, &state).contains("active"));
            assert!(!trigger_class(active.next(), &state).contains("active"));
        }
    }

    #[test]
    fn note_renders_with_separator() {
        let content = content().expect("embedded content");
        let entry = &content.evidence.entries[0];
        let (sep, note) = evidence_annotation(entry).expect("shipped entries carry notes");
        assert_eq!(sep, " — ");
        assert_eq!(Some(note), entry.note.as_deref());
    }

    #[test]
    fn missing_note_renders_nothing() {
        let entry = EvidenceEntry {
            label: "Snowplow".to_string(),
            href: "https://snowplow.io/".to_string(),
            note: None,
        };
        assert_eq!(evidence_annotation(&entry), None);
    }

    #[test]
    fn root_starts_without_dark_class() {
        let state = PageState::default();
        let root = root_presentation(state.theme);
        assert!(!root.dark_class);
        assert_eq!(root.data_theme, "light");
    }

    #[test]
    fn root_dark_class_follows_toggles() {
        let mut state = PageState::default();
        let before = root_presentation(state.theme);

        state.toggle_theme();
        let once = root_presentation(state.theme);
        assert!(once.dark_class);
        assert_eq!(once.data_theme, "dark");

        state.toggle_theme();
        assert_eq!(root_presentation(state.theme), before);
    }
}
