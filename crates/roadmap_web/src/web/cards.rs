use leptos::prelude::*;
use roadmap::content::{EvidenceCard, EvidenceEntry, SummaryCard};
use roadmap::model::Icon;

use crate::ui_model::evidence_annotation;

#[component]
pub(super) fn IconGlyph(icon: Icon) -> impl IntoView {
    view! { <span class="icon" aria-hidden="true">{icon.glyph()}</span> }
}

/// Rounded badge around inline content.
#[component]
pub(super) fn Pill(
    #[prop(optional_no_strip)] icon: Option<Icon>,
    children: Children,
) -> impl IntoView {
    view! {
        <span class="pill">
            {icon.map(|icon| view! { <IconGlyph icon=icon /> })}
            {children()}
        </span>
    }
}

#[component]
pub(super) fn CardHeading(
    title: &'static str,
    #[prop(optional_no_strip)] icon: Option<Icon>,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="card-header">
            <h3 class="card-title">
                {icon.map(|icon| view! { <IconGlyph icon=icon /> })}
                {title}
            </h3>
            <p class="card-description">{description}</p>
        </div>
    }
}

#[component]
pub(super) fn SummaryCardView(card: &'static SummaryCard) -> impl IntoView {
    view! {
        <section class="card">
            <CardHeading
                title=card.title.as_str()
                icon=card.icon
                description=card.description.as_str()
            />
            <div class="card-content">
                <ul class="bullets">
                    {card
                        .bullets
                        .iter()
                        .map(|b| view! { <li>{b.as_str()}</li> })
                        .collect_view()}
                </ul>
            </div>
        </section>
    }
}

/// One external reference: link, then ` — note` when a note exists.
#[component]
pub(super) fn EvidenceItem(entry: &'static EvidenceEntry) -> impl IntoView {
    view! {
        <li class="evidence-item">
            <a class="evidence-link" href=entry.href.as_str() target="_blank" rel="noreferrer">
                {entry.label.as_str()}
            </a>
            {evidence_annotation(entry)
                .map(|(separator, note)| {
                    view! {
                        {separator}
                        <span class="muted">{note}</span>
                    }
                })}
        </li>
    }
}

#[component]
pub(super) fn EvidenceCardView(card: &'static EvidenceCard) -> impl IntoView {
    view! {
        <section class="card">
            <CardHeading
                title=card.title.as_str()
                icon=card.icon
                description=card.description.as_str()
            />
            <div class="card-content">
                <ul class="bullets evidence">
                    {card
                        .entries
                        .iter()
                        .map(|entry| view! { <EvidenceItem entry=entry /> })
                        .collect_view()}
                </ul>
                <div class="footnote muted">
                    <IconGlyph icon=Icon::Info />
                    <p>{card.footnote.as_str()}</p>
                </div>
            </div>
        </section>
    }
}
