use thiserror::Error;

use crate::model::PhaseTab;

/// Errors raised while loading the roadmap content file.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("panel {position} is {found:?}, expected {expected:?}")]
    PanelOutOfOrder {
        position: usize,
        expected: PhaseTab,
        found: PhaseTab,
    },

    #[error("panel title {title:?} does not start with {expected:?}")]
    PanelTitleMismatch {
        title: String,
        expected: &'static str,
    },

    #[error("evidence entry {index} has an empty label")]
    EmptyLabel { index: usize },

    #[error("evidence entry {label:?} has invalid href {href:?}: {reason}")]
    InvalidHref {
        label: String,
        href: String,
        reason: String,
    },

    #[error("evidence entry {label:?} has a blank note")]
    BlankNote { label: String },
}
