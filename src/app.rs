//! Tableau App
//!
//! Dashboard layout: todo list, notes, calendar, search, chat.

use leptos::prelude::*;
use reactive_stores::Store;
use tableau_core::theme::{self, Theme};
use tableau_core::{visits, DashboardConfig};
use tracing::{info, warn};

use crate::browser::BrowserMedium;
use crate::components::{
    ChatPanel, DateDiff, EventList, NoteEditor, SearchPanel, TaskList, TitleBar,
};
use crate::context::AppContext;
use crate::store::DashboardState;

#[component]
pub fn App() -> impl IntoView {
    let store = tableau_core::Store::new(BrowserMedium);
    let config = DashboardConfig::load(&store);
    info!(?config, "[APP] starting");

    // Provide context to all children
    provide_context(AppContext::new(store, config));
    provide_context(Store::new(DashboardState::default()));

    let visits = match visits::record_visit(&store) {
        Ok(n) => Some(n),
        Err(e) => {
            warn!(error = %e, "[APP] visit not counted");
            None
        }
    };

    let initial_theme = theme::load_theme(&store).unwrap_or_else(|e| {
        warn!(error = %e, "[APP] theme flag unreadable");
        Theme::Light
    });
    let (theme, set_theme) = signal(initial_theme);

    view! {
        <div class=move || format!("app-layout {}", theme.get().body_class())>
            <TitleBar theme=theme set_theme=set_theme visits=visits />
            <main class="dashboard-grid">
                <TaskList />
                <NoteEditor />
                <EventList />
                <DateDiff />
                <SearchPanel />
                <ChatPanel />
            </main>
        </div>
    }
}
