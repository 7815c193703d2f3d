//! Storage Medium
//!
//! Synchronous, string-keyed storage scoped to one origin. The browser
//! implementation lives in the UI crate; `MemoryMedium` backs tests and
//! non-browser hosts.

use std::cell::RefCell;
use std::collections::HashMap;

/// Raw failures reported by a medium.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediumError {
    /// Write refused because the medium is full.
    QuotaExceeded,
    /// Medium missing, disabled or failing for another reason.
    Unavailable(String),
}

impl std::fmt::Display for MediumError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediumError::QuotaExceeded => write!(f, "quota exceeded"),
            MediumError::Unavailable(msg) => write!(f, "unavailable: {}", msg),
        }
    }
}

impl std::error::Error for MediumError {}

/// String key-value store, same contract as `window.localStorage`.
pub trait StorageMedium {
    fn get_item(&self, key: &str) -> Result<Option<String>, MediumError>;

    /// Overwrite `key` with `value`. A failed write leaves the old value intact.
    fn set_item(&self, key: &str, value: &str) -> Result<(), MediumError>;
}

/// In-process medium with an optional byte quota.
#[derive(Debug, Default)]
pub struct MemoryMedium {
    entries: RefCell<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryMedium {
    pub fn new() -> Self {
        Self::default()
    }

    /// Medium refusing writes once keys plus values exceed `bytes`.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
            quota: Some(bytes),
        }
    }

    /// Bytes currently used, counting keys and values.
    pub fn used_bytes(&self) -> usize {
        self.entries
            .borrow()
            .iter()
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl StorageMedium for MemoryMedium {
    fn get_item(&self, key: &str) -> Result<Option<String>, MediumError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), MediumError> {
        if let Some(limit) = self.quota {
            let replaced = self
                .entries
                .borrow()
                .get(key)
                .map(|old| key.len() + old.len())
                .unwrap_or(0);
            if self.used_bytes() - replaced + key.len() + value.len() > limit {
                return Err(MediumError::QuotaExceeded);
            }
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<M: StorageMedium + ?Sized> StorageMedium for &M {
    fn get_item(&self, key: &str) -> Result<Option<String>, MediumError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), MediumError> {
        (**self).set_item(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quota_rejects_and_keeps_old_value() {
        let medium = MemoryMedium::with_quota(16);
        medium.set_item("tasks", "[\"a\"]").unwrap();

        let err = medium.set_item("tasks", "[\"aaaaaaaaaaaaaa\"]").unwrap_err();
        assert_eq!(err, MediumError::QuotaExceeded);
        assert_eq!(medium.get_item("tasks").unwrap().as_deref(), Some("[\"a\"]"));
    }

    #[test]
    fn test_overwrite_counts_only_new_value() {
        let medium = MemoryMedium::with_quota(10);
        medium.set_item("k", "12345678").unwrap();
        // Replacing the value frees the old bytes first
        medium.set_item("k", "87654321").unwrap();
        assert_eq!(medium.used_bytes(), 9);
    }
}
