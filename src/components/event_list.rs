//! Event List Component
//!
//! Date + description form, a keyword filter ("weekend" shows Saturday and
//! Sunday only) and the stored events.

use leptos::prelude::*;
use tableau_core::events::{self, EventFilter};
use tracing::{error, warn};

use crate::components::{ProblemLine, RemovableRow};
use crate::context::use_app_context;
use crate::store::{use_dashboard_state, DashboardStateStoreFields};

#[component]
pub fn EventList() -> impl IntoView {
    let ctx = use_app_context();
    let state = use_dashboard_state();

    let (date, set_date) = signal(String::new());
    let (desc, set_desc) = signal(String::new());
    let (filter_text, set_filter_text) = signal(String::new());
    let (problem, set_problem) = signal::<Option<String>>(None);

    let list = StoredValue::new(events::EventList::new(ctx.store));
    let mut loaded = Ok(Vec::new());
    list.update_value(|l| loaded = l.reload().map(<[_]>::to_vec));
    match loaded {
        Ok(items) => *state.events().write() = items,
        Err(e) => {
            error!(error = %e, "[EVENTS] load failed");
            set_problem.set(Some(e.to_string()));
        }
    }

    let add_event = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (day, text) = (date.get_untracked(), desc.get_untracked());
        let mut saved = Ok(Vec::new());
        list.update_value(|l| saved = l.add(&day, &text).map(<[_]>::to_vec));
        match saved {
            Ok(items) => {
                *state.events().write() = items;
                set_desc.set(String::new());
                set_problem.set(None);
            }
            Err(e) => {
                warn!(error = %e, "[EVENTS] add rejected");
                set_problem.set(Some(e.to_string()));
            }
        }
    };

    let remove_event = Callback::new(move |index: usize| {
        let mut saved = Ok(Vec::new());
        list.update_value(|l| saved = l.remove(index).map(<[_]>::to_vec));
        match saved {
            Ok(items) => *state.events().write() = items,
            Err(e) => {
                error!(error = %e, index, "[EVENTS] remove failed");
                set_problem.set(Some(e.to_string()));
            }
        }
    });

    let visible = move || {
        let filter = EventFilter::parse(&filter_text.get());
        let all = state.events().get();
        filter
            .apply(&all)
            .into_iter()
            .map(|(index, event)| (index, event.clone()))
            .collect::<Vec<_>>()
    };

    view! {
        <section class="widget event-widget">
            <h2>"Calendar"</h2>
            <form class="event-add-form" on:submit=add_event>
                <input
                    type="date"
                    prop:value=move || date.get()
                    on:input=move |ev| set_date.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="What's happening?"
                    prop:value=move || desc.get()
                    on:input=move |ev| set_desc.set(event_target_value(&ev))
                />
                <button type="submit">"Add"</button>
            </form>
            <input
                type="text"
                class="event-filter"
                placeholder="Filter (try \"weekend\")"
                prop:value=move || filter_text.get()
                on:input=move |ev| set_filter_text.set(event_target_value(&ev))
            />
            <ProblemLine problem=problem />
            <ul class="event-list">
                <For
                    each=visible
                    key=|(index, event)| (*index, event.clone())
                    children=move |(index, event)| {
                        let class = if event.is_weekend() {
                            "event-row weekend"
                        } else {
                            "event-row"
                        };
                        let label = format!("{} {}", event.date_text(), event.desc);
                        view! {
                            <RemovableRow
                                index=index
                                label=label
                                class=class
                                on_remove=remove_event
                            >
                                <span class="event-date">{event.date_text()}</span>
                                <span class="event-desc">{event.desc.clone()}</span>
                            </RemovableRow>
                        }
                    }
                />
            </ul>
        </section>
    }
}
