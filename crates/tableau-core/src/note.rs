//! Shared Note
//!
//! A single free-text (HTML-bearing) value under the `note` key. An empty
//! note is a real state; only an absent key shows the placeholder.

use crate::error::Result;
use crate::medium::StorageMedium;
use crate::store::{keys, Store};

pub const NOTE_PLACEHOLDER: &str = "Start writing here…";

#[derive(Debug, Clone)]
pub struct Note<M> {
    store: Store<M>,
    /// `None` until something is saved
    saved: Option<String>,
}

impl<M: StorageMedium> Note<M> {
    /// Note with nothing read yet; the next save overwrites whatever is stored.
    pub fn new(store: Store<M>) -> Self {
        Self { store, saved: None }
    }

    pub fn load(store: Store<M>) -> Result<Self> {
        let saved = store.get(keys::NOTE, None)?;
        Ok(Self { store, saved })
    }

    /// Saved text; empty when nothing was ever saved.
    pub fn text(&self) -> &str {
        self.saved.as_deref().unwrap_or("")
    }

    pub fn is_saved(&self) -> bool {
        self.saved.is_some()
    }

    /// Text to put in the editor on load. The placeholder is never persisted.
    pub fn editor_text(&self) -> &str {
        self.saved.as_deref().unwrap_or(NOTE_PLACEHOLDER)
    }

    pub fn save(&mut self, html: &str) -> Result<()> {
        self.store.set(keys::NOTE, html)?;
        self.saved = Some(html.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::medium::MemoryMedium;

    #[test]
    fn test_absent_note_shows_placeholder() {
        let medium = MemoryMedium::new();
        let note = Note::load(Store::new(&medium)).unwrap();
        assert!(!note.is_saved());
        assert_eq!(note.text(), "");
        assert_eq!(note.editor_text(), NOTE_PLACEHOLDER);
        assert!(medium.get_item(keys::NOTE).unwrap().is_none());
    }

    #[test]
    fn test_empty_note_is_kept() {
        let medium = MemoryMedium::new();
        Note::load(Store::new(&medium)).unwrap().save("").unwrap();

        let note = Note::load(Store::new(&medium)).unwrap();
        assert!(note.is_saved());
        assert_eq!(note.editor_text(), "");
    }

    #[test]
    fn test_html_round_trips() {
        let medium = MemoryMedium::new();
        let mut note = Note::load(Store::new(&medium)).unwrap();
        note.save("<b>bold</b> &amp; \"quoted\"").unwrap();
        assert_eq!(note.text(), "<b>bold</b> &amp; \"quoted\"");

        let reread = Note::load(Store::new(&medium)).unwrap();
        assert_eq!(reread.text(), "<b>bold</b> &amp; \"quoted\"");
    }
}
