//! Key-value persistence backends.
//!
//! `Storage` is a localStorage-style string store: get/set/remove by
//! key, synchronous, local. `FileStorage` backs it with one file per
//! key; `MemoryStorage` keeps everything in a map for tests.

mod file;
mod memory;

use std::path::PathBuf;

use thiserror::Error;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read stored value '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write stored value '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove stored value '{path}': {source}")]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Synchronous string key-value storage.
///
/// All operations run to completion on the calling thread. A missing
/// key reads as `None`; removing a missing key is not an error.
pub trait Storage {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value stored under `key`.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}
