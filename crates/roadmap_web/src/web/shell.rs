use leptos::prelude::*;
use roadmap::content::PageHeader;

use super::cards::IconGlyph;
use super::ThemeContext;
use crate::ui_model::ThemeButton;

#[component]
pub(super) fn PageHeaderView(header: &'static PageHeader) -> impl IntoView {
    view! {
        <header class="page-header">
            <div>
                <h1 class="page-title">{header.title.as_str()}</h1>
                <p class="page-subtitle muted">{header.subtitle.as_str()}</p>
            </div>
            <ThemeToggle />
        </header>
    }
}

/// Offers the other theme: "Dark Mode" while light, "White Mode" while dark.
#[component]
fn ThemeToggle() -> impl IntoView {
    let ctx = expect_context::<ThemeContext>();
    let button = Memo::new(move |_| ThemeButton::for_theme(ctx.theme.get()));

    view! {
        <button
            type="button"
            class="btn outline"
            title=move || button.get().title
            on:click=move |_| ctx.toggle()
        >
            {move || {
                let b = button.get();
                view! {
                    <IconGlyph icon=b.icon />
                    {b.label}
                }
            }}
        </button>
    }
}

#[component]
pub(super) fn PageFooter(text: &'static str) -> impl IntoView {
    view! { <footer class="page-footer muted">{text}</footer> }
}

#[component]
pub(super) fn ContentErrorPage(message: String) -> impl IntoView {
    view! {
        <div class="page">
            <div class="container">
                <section class="card error-card">
                    <div class="card-header">
                        <h3 class="card-title">"Roadmap content failed to load"</h3>
                    </div>
                    <pre class="card-content">{message}</pre>
                </section>
            </div>
        </div>
    }
}
