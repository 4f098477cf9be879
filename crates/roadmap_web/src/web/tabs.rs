use leptos::ev::KeyboardEvent;
use leptos::prelude::*;
use roadmap::content::{PhasePanel, RoadmapContent};
use roadmap::model::{PageState, PhaseTab};

use super::cards::{CardHeading, Pill};
use super::dom;
use crate::ui_model::{aria_selected, roving_tabindex, trigger_class};

/// Phase tab switcher. Only the active panel is mounted.
#[component]
pub(super) fn PhaseTabs(
    content: &'static RoadmapContent,
    state: RwSignal<PageState>,
) -> impl IntoView {
    let visible = Memo::new(move |_| state.get().visible_panel(content));

    let select = move |tab: PhaseTab| {
        state.maybe_update(|s| s.select_tab(tab));
    };

    let on_keydown = move |ev: KeyboardEvent| {
        let Some(next) = state.with_untracked(|s| s.active_tab).from_key(&ev.key()) else {
            return;
        };
        ev.prevent_default();
        select(next);
        if let Err(e) = dom::focus_element(&next.trigger_id()) {
            dom::log_warn(&format!("tab focus failed: {e}"));
        }
    };

    view! {
        <div class="tabs">
            <div class="tabs-list" role="tablist" aria-label="Roadmap phases" on:keydown=on_keydown>
                {PhaseTab::all()
                    .iter()
                    .map(move |&tab| {
                        view! {
                            <button
                                type="button"
                                role="tab"
                                id=tab.trigger_id()
                                class=move || state.with(|s| trigger_class(tab, s))
                                aria-selected=move || state.with(|s| aria_selected(tab, s))
                                aria-controls=tab.panel_id()
                                tabindex=move || state.with(|s| roving_tabindex(tab, s))
                                on:click=move |_| select(tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            {move || view! { <TabPanel panel=visible.get() /> }}
        </div>
    }
}

#[component]
fn TabPanel(panel: &'static PhasePanel) -> impl IntoView {
    view! {
        <div
            class="tab-panel"
            role="tabpanel"
            id=panel.tab.panel_id()
            aria-labelledby=panel.tab.trigger_id()
        >
            <article class="card">
                <CardHeading title=panel.title.as_str() description=panel.description.as_str() />
                <div class="card-content muted">
                    {(!panel.pills.is_empty())
                        .then(|| {
                            view! {
                                <div class="pill-row">
                                    {panel
                                        .pills
                                        .iter()
                                        .map(|pill| {
                                            view! { <Pill icon=pill.icon>{pill.label.as_str()}</Pill> }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })}
                    <p>{panel.body.as_str()}</p>
                </div>
            </article>
        </div>
    }
}
