//! Static roadmap content.
//!
//! The text lives in `content/roadmap.json`, embedded at compile time and
//! parsed on first use. Editing the roadmap never touches rendering code.

use std::sync::OnceLock;

use serde::Deserialize;
use url::Url;

use crate::error::ContentError;
use crate::model::{Icon, PhaseTab};

const EMBEDDED: &str = include_str!("../content/roadmap.json");

static CONTENT: OnceLock<Result<RoadmapContent, ContentError>> = OnceLock::new();

/// The shipped roadmap content, parsed and validated once.
pub fn content() -> Result<&'static RoadmapContent, &'static ContentError> {
    CONTENT
        .get_or_init(|| RoadmapContent::from_json(EMBEDDED))
        .as_ref()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoadmapContent {
    pub header: PageHeader,
    pub summary: SummaryCard,
    phases: [PhasePanel; 4],
    pub evidence: EvidenceCard,
    pub footer: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageHeader {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SummaryCard {
    pub title: String,
    pub icon: Option<Icon>,
    pub description: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PhasePanel {
    pub tab: PhaseTab,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub pills: Vec<PillSpec>,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PillSpec {
    pub icon: Option<Icon>,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EvidenceCard {
    pub title: String,
    pub icon: Option<Icon>,
    pub description: String,
    pub entries: Vec<EvidenceEntry>,
    pub footnote: String,
}

/// An external reference link. `href` is rendered verbatim.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EvidenceEntry {
    pub label: String,
    pub href: String,
    pub note: Option<String>,
}

impl RoadmapContent {
    /// Parses and validates a content document.
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: RoadmapContent = serde_json::from_str(raw)?;
        content.validate()?;
        tracing::debug!(
            bullets = content.summary.bullets.len(),
            evidence = content.evidence.entries.len(),
            "roadmap content loaded"
        );
        Ok(content)
    }

    /// Panels in tab order.
    pub fn panels(&self) -> &[PhasePanel; 4] {
        &self.phases
    }

    pub fn panel(&self, tab: PhaseTab) -> &PhasePanel {
        &self.phases[tab.index()]
    }

    fn validate(&self) -> Result<(), ContentError> {
        for (position, (panel, &expected)) in self.phases.iter().zip(PhaseTab::all()).enumerate() {
            if panel.tab != expected {
                return Err(ContentError::PanelOutOfOrder {
                    position,
                    expected,
                    found: panel.tab,
                });
            }
            if !panel.title.starts_with(expected.label()) {
                return Err(ContentError::PanelTitleMismatch {
                    title: panel.title.clone(),
                    expected: expected.label(),
                });
            }
        }

        for (index, entry) in self.evidence.entries.iter().enumerate() {
            entry.validate(index)?;
        }
        Ok(())
    }
}

impl EvidenceEntry {
    fn validate(&self, index: usize) -> Result<(), ContentError> {
        if self.label.trim().is_empty() {
            return Err(ContentError::EmptyLabel { index });
        }

        let invalid = |reason: String| ContentError::InvalidHref {
            label: self.label.clone(),
            href: self.href.clone(),
            reason,
        };
        let url = Url::parse(&self.href).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {:?}", url.scheme())));
        }

        if self.note.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(ContentError::BlankNote {
                label: self.label.clone(),
            });
        }
        Ok(())
    }
}
