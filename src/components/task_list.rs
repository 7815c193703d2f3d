//! Task List Component
//!
//! Todo input plus the stored list; each row can be removed.

use leptos::prelude::*;
use tableau_core::{tasks, DashboardError};
use tracing::error;

use crate::components::{ProblemLine, RemovableRow};
use crate::context::use_app_context;
use crate::store::{use_dashboard_state, DashboardStateStoreFields};

#[component]
pub fn TaskList() -> impl IntoView {
    let ctx = use_app_context();
    let state = use_dashboard_state();

    let (new_text, set_new_text) = signal(String::new());
    let (problem, set_problem) = signal::<Option<String>>(None);

    let list = StoredValue::new(tasks::TaskList::new(ctx.store));
    let mut loaded = Ok(Vec::new());
    list.update_value(|l| loaded = l.reload().map(<[_]>::to_vec));
    match loaded {
        Ok(items) => *state.tasks().write() = items,
        Err(e) => {
            error!(error = %e, "[TASKS] load failed");
            set_problem.set(Some(e.to_string()));
        }
    }

    // Enter in the input submits the form
    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get_untracked();
        let mut saved = Ok(Vec::new());
        list.update_value(|l| saved = l.add(&text).map(<[_]>::to_vec));
        match saved {
            Ok(items) => {
                *state.tasks().write() = items;
                set_new_text.set(String::new());
                set_problem.set(None);
            }
            Err(DashboardError::InvalidInput(_)) => {}
            Err(e) => {
                error!(error = %e, "[TASKS] add failed");
                set_problem.set(Some(e.to_string()));
            }
        }
    };

    let remove_task = Callback::new(move |index: usize| {
        let mut saved = Ok(Vec::new());
        list.update_value(|l| saved = l.remove(index).map(<[_]>::to_vec));
        match saved {
            Ok(items) => *state.tasks().write() = items,
            Err(e) => {
                error!(error = %e, index, "[TASKS] remove failed");
                set_problem.set(Some(e.to_string()));
            }
        }
    });

    view! {
        <section class="widget task-widget">
            <h2>"Todo"</h2>
            <form class="task-add-form" on:submit=add_task>
                <input
                    type="text"
                    placeholder="New task..."
                    prop:value=move || new_text.get()
                    on:input=move |ev| set_new_text.set(event_target_value(&ev))
                />
                <button type="submit">"Add"</button>
            </form>
            <ProblemLine problem=problem />
            <ul class="task-list">
                <For
                    each=move || state.tasks().get().into_iter().enumerate()
                    key=|(index, text)| (*index, text.clone())
                    children=move |(index, text)| {
                        view! {
                            <RemovableRow
                                index=index
                                label=text.clone()
                                class="task-row"
                                on_remove=remove_task
                            >
                                <span class="task-text">{text}</span>
                            </RemovableRow>
                        }
                    }
                />
            </ul>
        </section>
    }
}
