//! Tableau Core
//!
//! Layered dashboard logic, free of any browser dependency:
//! - medium/store: typed JSON persistence over a string key-value medium
//! - tasks/events/note/theme/visits: one component per dashboard widget
//! - search: cross-collection substring finder
//! - chat: local and remote message logs
//! - debounce/config: delayed saving and runtime settings

pub mod chat;
pub mod config;
pub mod datediff;
pub mod debounce;
pub mod error;
pub mod events;
pub mod medium;
pub mod models;
pub mod note;
pub mod search;
pub mod store;
pub mod tasks;
pub mod theme;
pub mod visits;


pub use config::{ChatBackend, ChatConfig, DashboardConfig};
pub use error::{DashboardError, RemoteSyncError, Result, StoreError};
pub use medium::{MediumError, MemoryMedium, StorageMedium};
pub use models::{Event, Origin};
pub use search::{search, DateMatch, Finder, Match, SearchResults};
pub use store::{keys, Store};
