//! Tabs, theme and the page state machine.
//!
//! These are plain values so the web layer can hold them in signals and the
//! host tests can drive them without a browser.

use serde::{Deserialize, Serialize};

use crate::content::{PhasePanel, RoadmapContent};

/// One of the four roadmap phases. Phase 0 is always the initial tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseTab {
    #[default]
    Phase0,
    Phase1,
    Phase2,
    Phase3,
}

impl PhaseTab {
    /// Trigger label, also the required prefix of the panel title.
    pub fn label(self) -> &'static str {
        match self {
            PhaseTab::Phase0 => "Phase 0",
            PhaseTab::Phase1 => "Phase 1",
            PhaseTab::Phase2 => "Phase 2",
            PhaseTab::Phase3 => "Phase 3",
        }
    }

    /// Stable identifier used in the DOM and in the content file.
    pub fn value(self) -> &'static str {
        match self {
            PhaseTab::Phase0 => "phase0",
            PhaseTab::Phase1 => "phase1",
            PhaseTab::Phase2 => "phase2",
            PhaseTab::Phase3 => "phase3",
        }
    }

    /// Position in the tab list.
    pub fn index(self) -> usize {
        match self {
            PhaseTab::Phase0 => 0,
            PhaseTab::Phase1 => 1,
            PhaseTab::Phase2 => 2,
            PhaseTab::Phase3 => 3,
        }
    }

    pub fn all() -> &'static [PhaseTab; 4] {
        &[
            PhaseTab::Phase0,
            PhaseTab::Phase1,
            PhaseTab::Phase2,
            PhaseTab::Phase3,
        ]
    }

    pub fn first() -> PhaseTab {
        PhaseTab::Phase0
    }

    pub fn last() -> PhaseTab {
        PhaseTab::Phase3
    }

    /// Next tab, wrapping from the last back to the first.
    pub fn next(self) -> PhaseTab {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    /// Previous tab, wrapping from the first to the last.
    pub fn prev(self) -> PhaseTab {
        let all = Self::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }

    /// Maps a tablist key press to the tab it moves to, if any.
    ///
    /// Key names follow `KeyboardEvent.key`.
    pub fn from_key(self, key: &str) -> Option<PhaseTab> {
        match key {
            "ArrowRight" => Some(self.next()),
            "ArrowLeft" => Some(self.prev()),
            "Home" => Some(Self::first()),
            "End" => Some(Self::last()),
            _ => None,
        }
    }

    /// DOM id of the trigger button.
    pub fn trigger_id(self) -> String {
        format!("tab-{}", self.value())
    }

    /// DOM id of the panel.
    pub fn panel_id(self) -> String {
        format!("panel-{}", self.value())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Value of the `data-theme` attribute on the document root.
    pub fn as_attr(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Icons used by the page. Rendered as glyphs, no icon font needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Brain,
    Rocket,
    BookOpen,
    Layers,
    CheckCircle,
    Info,
    Moon,
    Sun,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Brain => "🧠",
            Icon::Rocket => "🚀",
            Icon::BookOpen => "📖",
            Icon::Layers => "🗂️",
            Icon::CheckCircle => "✅",
            Icon::Info => "ℹ️",
            Icon::Moon => "🌙",
            Icon::Sun => "☀️",
        }
    }
}

/// All mutable UI state of the page.
///
/// Starts in light mode on Phase 0. Nothing is persisted, a reload always
/// comes back to the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageState {
    pub theme: Theme,
    pub active_tab: PhaseTab,
}

impl PageState {
    /// Flips the theme and returns the new one.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggle();
        self.theme
    }

    /// Makes `tab` the active tab. Returns `false` if it already was.
    pub fn select_tab(&mut self, tab: PhaseTab) -> bool {
        if self.active_tab == tab {
            return false;
        }
        self.active_tab = tab;
        true
    }

    pub fn is_visible(&self, tab: PhaseTab) -> bool {
        self.active_tab == tab
    }

    /// The one panel that is rendered for the current state.
    pub fn visible_panel<'a>(&self, content: &'a RoadmapContent) -> &'a PhasePanel {
        content.panel(self.active_tab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::content;

    #[test]
    fn initial_state_is_light_phase0() {
        let state = PageState::default();
        assert_eq!(state.theme, Theme::Light);
        assert_eq!(state.active_tab, PhaseTab::Phase0);
        assert!(state.is_visible(PhaseTab::Phase0));
    }

    #[test]
    fn every_tab_shows_exactly_one_matching_panel() {
        let content = content().expect("embedded content");
        for &tab in PhaseTab::all() {
            let mut state = PageState::default();
            state.select_tab(tab);

            let visible: Vec<PhaseTab> = PhaseTab::all()
                .iter()
                .copied()
                .filter(|t| state.is_visible(*t))
                .collect();
            assert_eq!(visible, vec![tab]);

            let panel = state.visible_panel(content);
            assert_eq!(panel.tab, tab);
            assert!(panel.title.starts_with(tab.label()), "{}", panel.title);
        }
    }

    #[test]
    fn any_tab_can_reach_any_other() {
        for &from in PhaseTab::all() {
            for &to in PhaseTab::all() {
                let mut state = PageState {
                    active_tab: from,
                    ..PageState::default()
                };
                assert_eq!(state.select_tab(to), from != to);
                assert_eq!(state.active_tab, to);
            }
        }
    }

    #[test]
    fn selecting_same_tab_twice_is_a_no_op() {
        let mut state = PageState::default();
        assert!(state.select_tab(PhaseTab::Phase1));
        let snapshot = state;
        assert!(!state.select_tab(PhaseTab::Phase1));
        assert_eq!(state, snapshot);
    }

    #[test]
    fn theme_toggle_round_trips() {
        let mut state = PageState::default();
        assert_eq!(state.toggle_theme(), Theme::Dark);
        assert!(state.theme.is_dark());
        assert_eq!(state.theme.as_attr(), "dark");
        assert_eq!(state.toggle_theme(), Theme::Light);
        assert_eq!(state, PageState::default());
    }

    #[test]
    fn toggling_theme_leaves_tab_alone() {
        let mut state = PageState::default();
        state.select_tab(PhaseTab::Phase3);
        state.toggle_theme();
        assert_eq!(state.active_tab, PhaseTab::Phase3);
    }

    #[test]
    fn keyboard_navigation_wraps() {
        assert_eq!(PhaseTab::Phase3.from_key("ArrowRight"), Some(PhaseTab::Phase0));
        assert_eq!(PhaseTab::Phase0.from_key("ArrowLeft"), Some(PhaseTab::Phase3));
        assert_eq!(PhaseTab::Phase1.from_key("ArrowRight"), Some(PhaseTab::Phase2));
        assert_eq!(PhaseTab::Phase2.from_key("Home"), Some(PhaseTab::Phase0));
        assert_eq!(PhaseTab::Phase1.from_key("End"), Some(PhaseTab::Phase3));
        assert_eq!(PhaseTab::Phase1.from_key("Enter"), None);
    }

    #[test]
    fn tab_inventory_is_stable() {
        let all = PhaseTab::all();
        assert_eq!(all.len(), 4);

        let mut values: Vec<&'static str> = all.iter().copied().map(PhaseTab::value).collect();
        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), 4);

        for (i, &tab) in all.iter().enumerate() {
            assert_eq!(tab.index(), i);
            assert_ne!(tab.trigger_id(), tab.panel_id());
        }
    }

    #[test]
    fn tab_serde_names_match_dom_values() {
        for &tab in PhaseTab::all() {
            let json = serde_json::to_string(&tab).expect("serialize");
            assert_eq!(json, format!("\"{}\"", tab.value()));
            let back: PhaseTab = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(back, tab);
        }
        assert!(serde_json::from_str::<PhaseTab>("\"phase4\"").is_err());
    }
}
