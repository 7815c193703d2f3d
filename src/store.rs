//! Dashboard View State
//!
//! In-memory copies of the persisted collections, rebuilt from a full read
//! after every mutation. Uses Leptos reactive_stores for field-level
//! reactivity so the search panel sees every edit.

use leptos::prelude::*;
use reactive_stores::Store;
use tableau_core::Event;

#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Task texts in stored order
    pub tasks: Vec<String>,
    /// Events in stored order
    pub events: Vec<Event>,
    /// Saved note, empty when none
    pub note: String,
}

pub type DashboardStore = Store<DashboardState>;

pub fn use_dashboard_state() -> DashboardStore {
    expect_context::<DashboardStore>()
}
