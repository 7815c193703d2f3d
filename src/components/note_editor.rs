//! Note Editor Component
//!
//! Rich-text (contenteditable) note, saved 300 ms after the last keystroke
//! by default. Only one save is ever pending.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use tableau_core::debounce::{Debouncer, Scheduler};
use tableau_core::note::Note;
use tracing::{debug, error};

use crate::components::ProblemLine;
use crate::context::use_app_context;
use crate::store::{use_dashboard_state, DashboardStateStoreFields};

/// Browser timers; dropping a `Timeout` clears it
struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

#[component]
pub fn NoteEditor() -> impl IntoView {
    let ctx = use_app_context();
    let state = use_dashboard_state();
    let (problem, set_problem) = signal::<Option<String>>(None);

    let (note, initial) = match Note::load(ctx.store) {
        Ok(note) => {
            *state.note().write() = note.text().to_string();
            let initial = note.editor_text().to_string();
            (note, initial)
        }
        Err(e) => {
            error!(error = %e, "[NOTE] load failed");
            set_problem.set(Some(e.to_string()));
            (Note::new(ctx.store), String::new())
        }
    };
    let note = StoredValue::new(note);

    let debouncer = StoredValue::new_local(Debouncer::new(
        TimeoutScheduler,
        ctx.config().note_debounce_ms,
    ));
    on_cleanup(move || debouncer.update_value(|d| d.cancel()));

    let on_input = move |ev: web_sys::Event| {
        let html = event_target::<web_sys::HtmlElement>(&ev).inner_html();
        *state.note().write() = html.clone();
        debouncer.update_value(|d| {
            d.schedule(move || {
                let mut saved = Ok(());
                note.update_value(|n| saved = n.save(&html));
                match saved {
                    Ok(()) => {
                        debug!(bytes = html.len(), "[NOTE] saved");
                        set_problem.set(None);
                    }
                    Err(e) => {
                        error!(error = %e, "[NOTE] save failed");
                        set_problem.set(Some(e.to_string()));
                    }
                }
            })
        });
    };

    view! {
        <section class="widget note-widget">
            <h2>"Notes"</h2>
            <div
                class="note-editor"
                contenteditable="true"
                inner_html=initial
                on:input=on_input
            ></div>
            <ProblemLine problem=problem />
        </section>
    }
}
