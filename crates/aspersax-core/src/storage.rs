//! Durable key-value storage boundary.
//!
//! The entity store persists each collection as one JSON document under a
//! fixed key. Backends only move strings around; they know nothing about the
//! entities inside.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::StorageError;

/// A synchronous string key-value medium.
///
/// Every access returns an explicit `Result` so that callers decide how to
/// degrade; implementations must never panic on I/O failure.
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`, `Ok(None)` when absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory storage backed by a HashMap.
///
/// Clone-friendly via Arc: clones share the same map. Used for tests and as
/// the medium when no data directory is configured.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| StorageError::Lock("memory storage lock poisoned".into()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StorageError::Lock("memory storage lock poisoned".into()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StorageError::Lock("memory storage lock poisoned".into()))?;
        entries.remove(key);
        Ok(())
    }
}
