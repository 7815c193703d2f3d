//! Finder
//!
//! Case-insensitive substring scan over the note, the task list and the
//! event list. No tokenizing and no ranking: results come back grouped by
//! collection, each group in stored order.

use serde::{Deserialize, Serialize};

use crate::models::{Event, Origin};

/// Marker appended to every note snippet
pub const ELLIPSIS: &str = "…";

/// How the raw query is compared against an event's date text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateMatch {
    /// Query exactly as typed against the stored date text
    #[default]
    Verbatim,
    /// Both sides lowercased, same as descriptions
    CaseInsensitive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub origin: Origin,
    pub snippet: String,
}

impl Match {
    fn new(origin: Origin, snippet: String) -> Self {
        Self { origin, snippet }
    }
}

/// Outcome of one search. Callers keep `Option<SearchResults>` so that
/// `None` means no search has run yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResults {
    NoMatches,
    Matches(Vec<Match>),
}

impl SearchResults {
    pub fn matches(&self) -> &[Match] {
        match self {
            SearchResults::NoMatches => &[],
            SearchResults::Matches(found) => found,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SearchResults::NoMatches)
    }
}

impl From<Vec<Match>> for SearchResults {
    fn from(found: Vec<Match>) -> Self {
        if found.is_empty() {
            SearchResults::NoMatches
        } else {
            SearchResults::Matches(found)
        }
    }
}

/// Search settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finder {
    /// Characters of the note kept in its snippet
    pub snippet_chars: usize,
    pub date_match: DateMatch,
}

impl Default for Finder {
    fn default() -> Self {
        Self {
            snippet_chars: 30,
            date_match: DateMatch::default(),
        }
    }
}

impl Finder {
    pub fn new(snippet_chars: usize, date_match: DateMatch) -> Self {
        Self {
            snippet_chars,
            date_match,
        }
    }

    pub fn search(
        &self,
        query: &str,
        note: &str,
        tasks: &[String],
        events: &[Event],
    ) -> SearchResults {
        let needle = query.to_lowercase();
        let mut found = Vec::new();

        // An empty note never matches, even for an empty query
        if !note.is_empty() && note.to_lowercase().contains(&needle) {
            found.push(Match::new(Origin::Note, self.note_snippet(note)));
        }

        found.extend(
            tasks
                .iter()
                .filter(|task| task.to_lowercase().contains(&needle))
                .map(|task| Match::new(Origin::Task, task.clone())),
        );

        found.extend(
            events
                .iter()
                .filter(|event| {
                    event.desc.to_lowercase().contains(&needle) || self.date_matches(event, query)
                })
                .map(|event| {
                    Match::new(Origin::Event, format!("{} – {}", event.date_text(), event.desc))
                }),
        );

        SearchResults::from(found)
    }

    /// First `snippet_chars` characters plus the ellipsis, wherever the hit was.
    pub fn note_snippet(&self, note: &str) -> String {
        let mut snippet: String = note.chars().take(self.snippet_chars).collect();
        snippet.push_str(ELLIPSIS);
        snippet
    }

    fn date_matches(&self, event: &Event, query: &str) -> bool {
        let date = event.date_text();
        match self.date_match {
            DateMatch::Verbatim => date.contains(query),
            DateMatch::CaseInsensitive => date.to_lowercase().contains(&query.to_lowercase()),
        }
    }
}

/// Search with default settings.
pub fn search(query: &str, note: &str, tasks: &[String], events: &[Event]) -> SearchResults {
    Finder::default().search(query, note, tasks, events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn event(y: i32, m: u32, d: u32, desc: &str) -> Event {
        Event::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), desc.to_string())
    }

    fn tasks(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_everything_is_no_matches() {
        assert_eq!(search("", "", &[], &[]), SearchResults::NoMatches);
    }

    #[test]
    fn test_grouped_order() {
        let results = search(
            "cat",
            "I have a cat",
            &tasks(&["buy cat food", "walk dog"]),
            &[event(2024, 1, 1, "vet for cat")],
        );
        assert_eq!(
            results.matches(),
            &[
                Match::new(Origin::Note, "I have a cat…".into()),
                Match::new(Origin::Task, "buy cat food".into()),
                Match::new(Origin::Event, "2024-01-01 – vet for cat".into()),
            ]
        );
    }

    #[test]
    fn test_no_hit_is_marker_not_error() {
        let results = search(
            "XYZ",
            "nothing here",
            &tasks(&["alpha"]),
            &[event(2024, 3, 3, "beta")],
        );
        assert!(results.is_empty());
        assert!(results.matches().is_empty());
    }

    #[test]
    fn test_case_insensitive_note() {
        let results = search("CAT", "my cat", &[], &[]);
        assert_eq!(results.matches().len(), 1);
        assert_eq!(results.matches()[0].origin, Origin::Note);
    }

    #[test]
    fn test_long_note_truncated_at_thirty() {
        let note = "The quick brown fox jumps over the lazy dog near the cat";
        let results = search("cat", note, &[], &[]);
        let snippet = &results.matches()[0].snippet;
        assert_eq!(snippet, &format!("{}…", &note[..30]));
        assert_eq!(snippet.chars().count(), 31);
    }

    #[test]
    fn test_snippet_counts_characters_not_bytes() {
        let note = "é".repeat(40);
        let snippet = Finder::default().note_snippet(&note);
        assert_eq!(snippet, format!("{}…", "é".repeat(30)));
    }

    #[test]
    fn test_empty_query_matches_everything_but_empty_note() {
        let results = search(
            "",
            "",
            &tasks(&["a", "b"]),
            &[event(2024, 1, 1, "x")],
        );
        let origins: Vec<Origin> = results.matches().iter().map(|m| m.origin).collect();
        assert_eq!(origins, vec![Origin::Task, Origin::Task, Origin::Event]);

        let results = search("", "note", &[], &[]);
        assert_eq!(results.matches().len(), 1);
    }

    #[test]
    fn test_event_matches_on_date() {
        let events = [event(2024, 7, 14, "fireworks"), event(2023, 1, 2, "other")];
        let results = search("2024-07", "", &[], &events);
        assert_eq!(
            results.matches(),
            &[Match::new(Origin::Event, "2024-07-14 – fireworks".into())]
        );
    }

    #[test]
    fn test_date_policy_only_changes_date_comparison() {
        let events = [event(2024, 7, 14, "Fireworks")];
        let verbatim = Finder::new(30, DateMatch::Verbatim);
        let insensitive = Finder::new(30, DateMatch::CaseInsensitive);

        // Description stays case-insensitive under both policies
        assert_eq!(verbatim.search("FIRE", "", &[], &events).matches().len(), 1);
        assert_eq!(insensitive.search("FIRE", "", &[], &events).matches().len(), 1);
        assert_eq!(insensitive.search("2024-07-14", "", &[], &events).matches().len(), 1);
    }
}
