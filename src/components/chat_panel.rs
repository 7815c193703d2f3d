//! Chat Panel Component
//!
//! Message list kept in step with the configured log by polling, plus a
//! send form. A failed send leaves the text in the input for retry; a
//! successful one clears it unless the user has typed since.

use std::rc::Rc;

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tableau_core::chat::{input_after_send, AppendLog, ChatDraft, ChatFeed, LocalLog};
use tableau_core::DashboardError;
use tracing::{error, info, warn};

use crate::components::ProblemLine;
use crate::context::use_app_context;
use crate::remote::RealtimeDbLog;

#[component]
pub fn ChatPanel() -> impl IntoView {
    let ctx = use_app_context();
    let config = ctx.config().chat;

    let log: Rc<dyn AppendLog> = match config.remote_url() {
        Some(url) => {
            let remote = RealtimeDbLog::new(url, &config.path);
            info!(url = remote.url(), "[CHAT] using realtime database");
            Rc::new(remote)
        }
        None => Rc::new(LocalLog::new(ctx.store)),
    };
    let log = StoredValue::new_local(log);

    let feed = RwSignal::new(ChatFeed::new());
    let (draft, set_draft) = signal(String::new());
    let (sending, set_sending) = signal(false);
    let (problem, set_problem) = signal::<Option<String>>(None);
    let refreshing = StoredValue::new(false);

    let refresh = move || {
        if refreshing.get_value() {
            return;
        }
        refreshing.set_value(true);
        let log = log.get_value();
        spawn_local(async move {
            let mut current = feed.get_untracked();
            match current.refresh(log.as_ref()).await {
                Ok(0) => {}
                Ok(_) => feed.set(current),
                Err(e) => warn!(error = %e, "[CHAT] refresh failed"),
            }
            refreshing.set_value(false);
        });
    };

    refresh();
    let poller = StoredValue::new_local(Some(Interval::new(config.poll_interval_ms(), refresh)));
    on_cleanup(move || poller.set_value(None));

    let send = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        set_sending.set(true);
        let log = log.get_value();
        let sent = draft.get_untracked();
        let mut outgoing = ChatDraft::new(sent.clone());
        spawn_local(async move {
            match outgoing.send(log.as_ref()).await {
                Ok(_) => {
                    set_draft.set(input_after_send(&sent, draft.get_untracked()));
                    set_problem.set(None);
                    refresh();
                }
                Err(DashboardError::InvalidInput(_)) => {}
                Err(e) => {
                    error!(error = %e, "[CHAT] send failed");
                    set_problem.set(Some(format!("Not sent ({}). Your message was kept.", e)));
                }
            }
            set_sending.set(false);
        });
    };

    view! {
        <section class="widget chat-widget">
            <h2>"Chat"</h2>
            <ul class="chat-messages">
                <For
                    each=move || feed.get().entries().to_vec()
                    key=|entry| entry.seq.clone()
                    children=|entry| view! { <li class="chat-message">{entry.text}</li> }
                />
            </ul>
            <ProblemLine problem=problem />
            <form class="chat-form" on:submit=send>
                <input
                    type="text"
                    placeholder="Message..."
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || sending.get()>"Send"</button>
            </form>
        </section>
    }
}
