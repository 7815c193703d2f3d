//! Title Bar Component
//!
//! Dashboard heading with the visit count and the dark/light toggle.

use leptos::prelude::*;
use tableau_core::theme::{self, Theme};
use tracing::warn;

use crate::context::use_app_context;

#[component]
pub fn TitleBar(
    theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
    visits: Option<u64>,
) -> impl IntoView {
    let ctx = use_app_context();

    // The page flips even when the flag cannot be saved
    let toggle_theme = move |_| {
        let next = theme.get_untracked().toggled();
        set_theme.set(next);
        if let Err(e) = theme::save_theme(&ctx.store, next) {
            warn!(error = %e, "[THEME] not persisted");
        }
    };

    view! {
        <header class="titlebar">
            <span class="titlebar-title">"Tableau"</span>
            {visits.map(|n| view! {
                <span class="visit-count" title="Visits on this browser">
                    {format!("visit #{}", n)}
                </span>
            })}
            <button
                class="titlebar-btn theme"
                title=move || if theme.get().is_dark() { "Light mode" } else { "Dark mode" }
                on:click=toggle_theme
            >
                {move || if theme.get().is_dark() { "☀" } else { "☾" }}
            </button>
        </header>
    }
}
