//! Key-value store port
//!
//! Defines where picker state is mirrored between sessions. The store only
//! knows strings; encoding the pool is the persistence layer's job.

use thiserror::Error;

/// Errors raised by a key-value store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage file is corrupt: {0}")]
    Corrupt(String),

    #[error("storage is unavailable: {0}")]
    Unavailable(String),
}

/// Port for a string-to-string store
///
/// Implementations live in the infrastructure layer (JSON file, in-memory).
/// Callers treat every failure as non-fatal.
pub trait KeyValueStore: Send + Sync {
    /// Read a value; `Ok(None)` when the key is absent
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete a value; removing an absent key is not an error
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
