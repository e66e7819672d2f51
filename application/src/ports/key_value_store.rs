//! Key-value store port
//!
//! Durable storage is a single flat key space of string values. Adapters
//! decide where the bytes live (files on disk, memory); the application
//! only knows the two keys below.

use thiserror::Error;

/// Key holding the JSON snapshot of the form
pub const FORM_STATE_KEY: &str = "form-state";

/// Key holding the raw text of the last rendered solver response
pub const OUTPUT_KEY: &str = "last-output";

/// Errors that can occur while reading or writing durable storage
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage I/O error on key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Durable string storage
///
/// Writes are last-write-wins with no versioning.
pub trait KeyValueStore: Send + Sync {
    /// Read a value; `Ok(None)` when the key was never written
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete a value; deleting a missing key is not an error
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
