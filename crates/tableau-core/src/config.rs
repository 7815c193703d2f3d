//! Dashboard Configuration
//!
//! Runtime settings, read once at startup from the `settings` key. Every
//! field has a default so partial overrides are accepted.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::medium::StorageMedium;
use crate::search::{DateMatch, Finder};
use crate::store::{keys, Store};

/// Compile-time remote chat endpoint, if the build set one.
const BUILD_CHAT_URL: Option<&str> = option_env!("TABLEAU_CHAT_URL");

/// Shortest chat poll period honoured, whatever the settings say.
pub const MIN_POLL_MS: u32 = 250;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Quiet time before the note is saved
    pub note_debounce_ms: u32,
    /// Note characters shown in a search snippet
    pub snippet_chars: usize,
    pub date_match: DateMatch,
    pub chat: ChatConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            note_debounce_ms: 300,
            snippet_chars: 30,
            date_match: DateMatch::default(),
            chat: ChatConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatBackend {
    /// Messages stay in this browser's storage
    #[default]
    Local,
    /// Hosted realtime database
    Remote,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub backend: ChatBackend,
    /// Database root, e.g. `https://example-rtdb.firebaseio.com`
    pub base_url: Option<String>,
    /// Location of the message log under the root
    pub path: String,
    /// Requested poll period; read it through `poll_interval_ms`
    pub poll_ms: u32,
}

impl Default for ChatConfig {
    fn default() -> Self {
        let base_url = BUILD_CHAT_URL.map(str::to_string);
        Self {
            backend: if base_url.is_some() {
                ChatBackend::Remote
            } else {
                ChatBackend::Local
            },
            base_url,
            path: "chat".to_string(),
            poll_ms: 2_000,
        }
    }
}

impl ChatConfig {
    /// Remote endpoint, only when the remote backend is selected and usable.
    pub fn remote_url(&self) -> Option<&str> {
        match self.backend {
            ChatBackend::Remote => self.base_url.as_deref().filter(|u| !u.trim().is_empty()),
            ChatBackend::Local => None,
        }
    }

    /// Poll period actually used, never below `MIN_POLL_MS`.
    pub fn poll_interval_ms(&self) -> u32 {
        self.poll_ms.max(MIN_POLL_MS)
    }
}

impl DashboardConfig {
    /// Stored overrides on top of defaults. Unreadable settings are logged
    /// and ignored so the dashboard still starts.
    pub fn load<M: StorageMedium>(store: &Store<M>) -> Self {
        match store.get(keys::SETTINGS, DashboardConfig::default()) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "ignoring stored settings");
                DashboardConfig::default()
            }
        }
    }

    pub fn finder(&self) -> Finder {
        Finder::new(self.snippet_chars, self.date_match)
    }
}
