//! Store
//!
//! Typed JSON persistence over a [`StorageMedium`]. Every feature reads its
//! whole collection, changes it in memory, and writes the whole thing back.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error};

use crate::error::StoreError;
use crate::medium::{MediumError, StorageMedium};

/// Key namespace owned by the Store.
pub mod keys {
    pub const TASKS: &str = "tasks";
    pub const EVENTS: &str = "events";
    pub const NOTE: &str = "note";
    pub const CHAT_MESSAGES: &str = "chatMsgs";
    pub const DARK_MODE: &str = "darkMode";
    pub const VISITS: &str = "visits";
    pub const SETTINGS: &str = "settings";
}

/// Persistence facade, the sole owner of the serialized representation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Store<M> {
    medium: M,
}

impl<M: StorageMedium> Store<M> {
    pub fn new(medium: M) -> Self {
        Self { medium }
    }

    /// Read and decode the value under `key`.
    ///
    /// An absent key yields `fallback` itself, untouched. Text that is not
    /// valid JSON for `T` is reported as corruption and never repaired.
    pub fn get<T: DeserializeOwned>(&self, key: &str, fallback: T) -> Result<T, StoreError> {
        let Some(raw) = self.get_raw(key)? else {
            debug!(key, "absent, using fallback");
            return Ok(fallback);
        };
        serde_json::from_str(&raw).map_err(|source| {
            error!(key, %source, "stored value is not valid JSON");
            StoreError::Deserialization {
                key: key.to_string(),
                source,
            }
        })
    }

    /// Encode `value` and overwrite whatever was stored under `key`.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value).map_err(|source| StoreError::Serialization {
            key: key.to_string(),
            source,
        })?;
        self.set_raw(key, &raw)
    }

    /// Raw text under `key`, without decoding.
    pub fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.medium
            .get_item(key)
            .map_err(|e| map_medium_error(key, e))
    }

    pub fn set_raw(&self, key: &str, raw: &str) -> Result<(), StoreError> {
        debug!(key, bytes = raw.len(), "write");
        self.medium
            .set_item(key, raw)
            .map_err(|e| map_medium_error(key, e))
    }
}

fn map_medium_error(key: &str, err: MediumError) -> StoreError {
    match err {
        MediumError::QuotaExceeded => StoreError::StorageQuota {
            key: key.to_string(),
        },
        MediumError::Unavailable(msg) => StoreError::Unavailable(msg),
    }
}
