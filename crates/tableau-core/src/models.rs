//! Dashboard Models
//!
//! Plain JSON-compatible values stored under the fixed keys.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// A todo entry is just its text.
pub type Task = String;

/// Chat messages are plain strings in the local variant.
pub type ChatMessage = String;

/// Calendar entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    /// ISO-8601 calendar date ("YYYY-MM-DD" on the wire)
    pub date: NaiveDate,
    pub desc: String,
}

impl Event {
    pub fn new(date: NaiveDate, desc: String) -> Self {
        Self { date, desc }
    }

    /// Date rendered the way it is stored
    pub fn date_text(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn is_weekend(&self) -> bool {
        matches!(self.date.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

/// Collection a search match came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Note,
    Task,
    Event,
}

impl Origin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::Note => "note",
            Origin::Task => "task",
            Origin::Event => "event",
        }
    }

    /// Human label used in the results list
    pub fn label(&self) -> &'static str {
        match self {
            Origin::Note => "Note",
            Origin::Task => "Task",
            Origin::Event => "Event",
        }
    }
}
