use leptos::prelude::*;
use roadmap::content::{self, RoadmapContent};
use roadmap::model::{PageState, Theme};

mod cards;
mod dom;
mod shell;
mod tabs;

use cards::{EvidenceCardView, SummaryCardView};
use shell::{ContentErrorPage, PageFooter, PageHeaderView};
use tabs::PhaseTabs;

pub fn start() {
    dom::log_info("roadmap_web: mounting");
    mount_to_body(|| view! { <App /> });
}

/// Theme handed to every descendant through context.
#[derive(Clone, Copy)]
struct ThemeContext {
    theme: Memo<Theme>,
    state: RwSignal<PageState>,
}

impl ThemeContext {
    fn toggle(&self) {
        self.state.update(|s| {
            s.toggle_theme();
        });
    }
}

#[component]
fn App() -> impl IntoView {
    match content::content() {
        Ok(content) => view! { <RootPage content=content /> }.into_any(),
        Err(e) => {
            dom::log_warn(&format!("roadmap content failed to load: {e}"));
            view! { <ContentErrorPage message=e.to_string() /> }.into_any()
        }
    }
}

#[component]
fn RootPage(content: &'static RoadmapContent) -> impl IntoView {
    let state = RwSignal::new(PageState::default());
    let theme = Memo::new(move |_| state.get().theme);
    provide_context(ThemeContext { theme, state });

    Effect::new(move |_| {
        let theme = theme.get();
        if let Err(e) = dom::apply_theme_to_document(theme) {
            dom::log_warn(&format!("failed to apply {} theme: {e}", theme.as_attr()));
        }
    });

    let header = &content.header;
    let summary = &content.summary;
    let evidence = &content.evidence;
    let footer = content.footer.as_str();

    view! {
        <div class="page">
            <div class="container">
                <PageHeaderView header=header />
                <SummaryCardView card=summary />
                <PhaseTabs content=content state=state />
                <EvidenceCardView card=evidence />
                <PageFooter text=footer />
            </div>
        </div>
    }
}
