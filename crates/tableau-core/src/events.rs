//! Event List
//!
//! Calendar entries under the `events` key, plus the keyword filter used by
//! the events panel.

use chrono::NaiveDate;
use tracing::info;

use crate::error::{DashboardError, Result};
use crate::medium::StorageMedium;
use crate::models::Event;
use crate::store::{keys, Store};

/// Parse an ISO-8601 calendar date ("YYYY-MM-DD").
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return Err(DashboardError::InvalidInput("date is required".to_string()));
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|e| DashboardError::InvalidInput(format!("invalid date '{}': {}", text, e)))
}

/// Calendar widget state over the `events` key.
#[derive(Debug, Clone)]
pub struct EventList<M> {
    store: Store<M>,
    items: Vec<Event>,
}

impl<M: StorageMedium> EventList<M> {
    pub fn new(store: Store<M>) -> Self {
        Self {
            store,
            items: Vec::new(),
        }
    }

    pub fn load(store: Store<M>) -> Result<Self> {
        let mut list = Self::new(store);
        list.reload()?;
        Ok(list)
    }

    pub fn items(&self) -> &[Event] {
        &self.items
    }

    pub fn reload(&mut self) -> Result<&[Event]> {
        self.items = self.read()?;
        Ok(&self.items)
    }

    /// Append an event. No ordering is imposed.
    pub fn add(&mut self, date: &str, desc: &str) -> Result<&[Event]> {
        let desc = desc.trim();
        if desc.is_empty() {
            return Err(DashboardError::InvalidInput("event description is empty".to_string()));
        }
        let date = parse_date(date)?;
        let mut events = self.read()?;
        events.push(Event::new(date, desc.to_string()));
        self.store.set(keys::EVENTS, &events)?;
        info!(%date, count = events.len(), "event added");
        self.items = events;
        Ok(&self.items)
    }

    pub fn remove(&mut self, index: usize) -> Result<&[Event]> {
        let mut events = self.read()?;
        if index >= events.len() {
            return Err(DashboardError::InvalidInput(format!(
                "no event at index {} (have {})",
                index,
                events.len()
            )));
        }
        events.remove(index);
        self.store.set(keys::EVENTS, &events)?;
        self.items = events;
        Ok(&self.items)
    }

    fn read(&self) -> Result<Vec<Event>> {
        Ok(self.store.get(keys::EVENTS, Vec::new())?)
    }
}

/// View filter for the events panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventFilter {
    All,
    /// Saturday and Sunday only
    Weekend,
    /// Case-insensitive description substring
    Keyword(String),
}

impl EventFilter {
    pub fn parse(input: &str) -> Self {
        let input = input.trim().to_lowercase();
        match input.as_str() {
            "" => EventFilter::All,
            "weekend" | "week-end" => EventFilter::Weekend,
            _ => EventFilter::Keyword(input),
        }
    }

    pub fn accepts(&self, event: &Event) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Weekend => event.is_weekend(),
            EventFilter::Keyword(word) => event.desc.to_lowercase().contains(word.as_str()),
        }
    }

    /// Events passing the filter, paired with their index in the stored list
    /// so rows can still be removed by position.
    pub fn apply<'a>(&self, events: &'a [Event]) -> Vec<(usize, &'a Event)> {
        events
            .iter()
            .enumerate()
            .filter(|(_, e)| self.accepts(e))
            .collect()
    }
}
