//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;
use tableau_core::{DashboardConfig, Store};

use crate::browser::BrowserMedium;

/// App-wide handles; every component reads and writes through `store`
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Persistence facade over localStorage
    pub store: Store<BrowserMedium>,
    /// Settings loaded once at startup
    config: StoredValue<DashboardConfig>,
}

impl AppContext {
    pub fn new(store: Store<BrowserMedium>, config: DashboardConfig) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> DashboardConfig {
        self.config.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
