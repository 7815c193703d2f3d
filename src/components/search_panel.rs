//! Search Panel Component
//!
//! Searches the note, tasks and events as the query changes.

use leptos::prelude::*;
use tableau_core::SearchResults;

use crate::context::use_app_context;
use crate::store::{use_dashboard_state, DashboardStateStoreFields};

#[component]
pub fn SearchPanel() -> impl IntoView {
    let ctx = use_app_context();
    let state = use_dashboard_state();
    let finder = ctx.config().finder();

    let (query, set_query) = signal::<Option<String>>(None);

    // None until the user has typed something once
    let results = Memo::new(move |_| {
        query.get().map(|q| {
            finder.search(
                &q,
                &state.note().get(),
                &state.tasks().get(),
                &state.events().get(),
            )
        })
    });

    view! {
        <section class="widget search-widget">
            <h2>"Search"</h2>
            <input
                type="search"
                placeholder="Search notes, tasks, events..."
                prop:value=move || query.get().unwrap_or_default()
                on:input=move |ev| set_query.set(Some(event_target_value(&ev)))
            />
            {move || match results.get() {
                None => ().into_any(),
                Some(SearchResults::NoMatches) => view! {
                    <p class="search-empty">"No results."</p>
                }.into_any(),
                Some(SearchResults::Matches(found)) => view! {
                    <ul class="search-results">
                        {found.into_iter().map(|m| view! {
                            <li class=format!("search-hit {}", m.origin.as_str())>
                                <span class="search-origin">{m.origin.label()}</span>
                                <span class="search-snippet">{m.snippet}</span>
                            </li>
                        }).collect_view()}
                    </ul>
                }.into_any(),
            }}
        </section>
    }
}
