//! Error Taxonomy
//!
//! Each dashboard feature owns its failure path; these types only classify.

use thiserror::Error;

/// Failures of the persistence facade.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Stored text under `key` is not valid JSON for the requested type.
    #[error("corrupt value under '{key}': {source}")]
    Deserialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The medium rejected the write for lack of space.
    #[error("storage quota exceeded while writing '{key}'")]
    StorageQuota { key: String },

    /// Value could not be turned into JSON text.
    #[error("cannot serialize value for '{key}': {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The medium itself is missing or failed for another reason.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Failures talking to the shared realtime message log.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteSyncError {
    #[error("remote rejected write: {0}")]
    Rejected(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Top-level error returned by dashboard components.
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    RemoteSync(#[from] RemoteSyncError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
