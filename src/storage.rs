//! Durable Storage
//!
//! Key-value backends for the persisted board plus the stored record layout.

use std::collections::HashMap;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Category;

/// Version written inside the record; other versions are not read
pub const RECORD_VERSION: u32 = 0;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
    #[error("stored record is malformed: {0}")]
    Format(#[from] serde_json::Error),
}

/// Minimal key-value store the board persists through
pub trait StorageBackend: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`
///
/// Looked up on every call so the handle stays `Send + Sync`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
    }

    /// Probe whether local storage can be used in this browser session
    pub fn available() -> bool {
        Self::storage().is_ok()
    }
}

impl StorageBackend for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read(format!("{:?}", e)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

/// In-process storage, used in tests and when local storage is denied
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        if let Ok(mut entries) = storage.entries.write() {
            entries.insert(key.to_string(), value.to_string());
        }
        storage
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.read().map_err(|e| StorageError::Read(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(|e| StorageError::Write(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Shared handle, so a test can inspect what the store wrote
impl<T: StorageBackend + ?Sized> StorageBackend for std::sync::Arc<T> {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredState {
    categories: Vec<Category>,
}

/// `{"state":{"categories":[...]},"version":0}`
#[derive(Debug, Serialize, Deserialize)]
struct StoredRecord {
    state: StoredState,
    #[serde(default)]
    version: u32,
}

pub fn encode_record(categories: &[Category]) -> Result<String, StorageError> {
    let record = StoredRecord {
        state: StoredState { categories: categories.to_vec() },
        version: RECORD_VERSION,
    };
    Ok(serde_json::to_string(&record)?)
}

/// Decode a stored record. `Ok(None)` for a record of another version.
pub fn decode_record(raw: &str) -> Result<Option<Vec<Category>>, StorageError> {
    let record: StoredRecord = serde_json::from_str(raw)?;
    if record.version != RECORD_VERSION {
        return Ok(None);
    }
    Ok(Some(record.state.categories))
}
