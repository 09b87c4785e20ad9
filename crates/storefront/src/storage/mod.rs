//! Durable storage for storefront state.
//!
//! Storage is a local, synchronous key-value store holding independent
//! JSON blobs:
//!
//! - [`keys::USER`] - the signed-in identity, absent when signed out
//! - [`keys::CART`] - the ordered list of cart line items
//!
//! # Backends
//!
//! - [`MemoryStorage`] - process-local map, used by tests and ephemeral runs
//! - [`FileStorage`] - one `<key>.json` file per key under a data directory
//!
//! Writes are not transactional and are not coordinated across processes
//! sharing the same backing store.

mod file;
mod memory;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Storage keys for persisted state.
pub mod keys {
    /// Key for the serialized signed-in user.
    pub const USER: &str = "user";

    /// Key for the serialized cart snapshot.
    pub const CART: &str = "cart";
}

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing store failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be serialized for writing.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A stored value exists but could not be parsed.
    #[error("data corruption in {key}: {reason}")]
    DataCorruption {
        /// The key holding the malformed value.
        key: String,
        /// Parser error message.
        reason: String,
    },
}

/// A synchronous key-value store for persisted blobs.
pub trait KeyValueStore: Send + Sync + std::fmt::Debug {
    /// Read the raw value for a key, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write the raw value for a key, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the backing store cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a key. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the backing store cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Storage handle shared between stores.
pub type SharedStorage = Arc<dyn KeyValueStore>;

/// Read and deserialize a JSON value.
///
/// # Errors
///
/// Returns `StorageError::DataCorruption` if a value is present but is not
/// valid JSON for `T`, or any error from the backend read.
pub fn load_json<T: DeserializeOwned>(
    storage: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    let Some(raw) = storage.get(key)? else {
        return Ok(None);
    };

    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| StorageError::DataCorruption {
            key: key.to_owned(),
            reason: e.to_string(),
        })
}

/// Serialize and write a JSON value.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if the value cannot be encoded, or
/// any error from the backend write.
pub fn save_json<T: Serialize + ?Sized>(
    storage: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)?;
    storage.set(key, &raw)
}
