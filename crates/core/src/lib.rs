//! # roadmap
//!
//! Content and UI state behind the IFRS AI roadmap page.
//!
//! Nothing here touches the browser, so the whole crate builds and tests on
//! the host. The Leptos front end (`roadmap_web`) renders what this crate
//! describes.
//!
//! ## Quick Start
//!
//! ```
//! use roadmap::prelude::*;
//!
//! let content = roadmap::content::content().expect("embedded content is valid");
//!
//! let mut state = PageState::default();
//! assert_eq!(state.active_tab, PhaseTab::Phase0);
//!
//! state.select_tab(PhaseTab::Phase2);
//! assert!(state.visible_panel(content).title.starts_with("Phase 2"));
//!
//! state.toggle_theme();
//! assert!(state.theme.is_dark());
//! ```
//!
//! ## Modules
//!
//! - [`content`]: the static roadmap text, loaded once and validated
//! - [`model`]: tabs, theme, icons and the page state machine
//! - [`error`]: content loading errors

pub mod content;
pub mod error;
pub mod model;

/// Convenient re-exports for the common types.
pub mod prelude {
    pub use crate::content::{
        EvidenceCard, EvidenceEntry, PageHeader, PhasePanel, PillSpec, RoadmapContent,
        SummaryCard,
    };
    pub use crate::error::ContentError;
    pub use crate::model::{Icon, PageState, PhaseTab, Theme};
}
