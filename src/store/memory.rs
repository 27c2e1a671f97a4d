//! In-memory storage implementation

use super::hash::KeyHasher;
use super::{Store, StoreError};
use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Type alias for the hash table behind one engine instance
type Table = HashMap<Bytes, Bytes, KeyHasher>;

/// In-memory key-value store
///
/// This is the sole concrete `Store` engine. All entries live in a single
/// hash table guarded by one exclusive lock; every operation hashes the key
/// with the engine's own SipHash seed, takes the lock, performs one table
/// operation, and releases the lock on every exit path. The critical
/// section is O(1), so hold times stay short even under contention.
///
/// Each instance owns its own lock, seed, and table. Share an engine by
/// reference (`Arc<MemoryStore>`) across tasks; contents are lost when the
/// last reference drops.
pub struct MemoryStore {
    /// The table, behind the engine's exclusive lock
    table: Mutex<Table>,
}

impl MemoryStore {
    /// Create a new memory store with default capacity
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// Create a new memory store with specified initial capacity
    pub fn with_capacity(capacity: usize) -> Self {
        debug!("Initializing memory store (capacity {})", capacity);
        MemoryStore {
            table: Mutex::new(HashMap::with_capacity_and_hasher(
                capacity,
                KeyHasher::random(),
            )),
        }
    }

    /// Check if a key is registered
    pub async fn exists(&self, key: &[u8]) -> bool {
        self.table.lock().await.contains_key(key)
    }

    /// Get the number of registered entries
    pub async fn len(&self) -> usize {
        self.table.lock().await.len()
    }

    /// Check if the store is empty
    pub async fn is_empty(&self) -> bool {
        self.table.lock().await.is_empty()
    }

    /// Get all keys (expensive operation, for debugging/admin)
    pub async fn keys(&self) -> Vec<Bytes> {
        self.table.lock().await.keys().cloned().collect()
    }

    /// Remove all entries
    pub async fn clear(&self) {
        let mut table = self.table.lock().await;
        debug!("Clearing memory store ({} entries)", table.len());
        table.clear();
    }

    /// Get statistics about the store
    pub async fn stats(&self) -> StoreStats {
        let table = self.table.lock().await;
        let used_memory_bytes = table.iter().map(|(k, v)| k.len() + v.len()).sum();

        StoreStats {
            keys: table.len(),
            used_memory_bytes,
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create(
        &self,
        _cancel: &CancellationToken,
        key: Bytes,
        value: Bytes,
    ) -> Result<(), StoreError> {
        // Structural check first: an empty key is rejected regardless of
        // table state
        if key.is_empty() {
            return Err(StoreError::InvalidKey);
        }

        let mut table = self.table.lock().await;
        if table.contains_key(&key[..]) {
            return Err(StoreError::AlreadyExists);
        }
        table.insert(key, value);
        Ok(())
    }

    async fn read(&self, _cancel: &CancellationToken, key: &[u8]) -> Result<Bytes, StoreError> {
        let table = self.table.lock().await;
        // Bytes::clone is a refcount bump; the returned value shares the
        // stored buffer
        table.get(key).cloned().ok_or(StoreError::NotFound)
    }

    async fn update(
        &self,
        _cancel: &CancellationToken,
        key: &[u8],
        value: Bytes,
    ) -> Result<(), StoreError> {
        let mut table = self.table.lock().await;
        match table.get_mut(key) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }

    async fn delete(&self, _cancel: &CancellationToken, key: &[u8]) -> Result<(), StoreError> {
        let mut table = self.table.lock().await;
        match table.remove(key) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound),
        }
    }
}

/// Statistics about the memory store
#[derive(Debug, Clone, serde::Serialize)]
pub struct StoreStats {
    pub keys: usize,
    pub used_memory_bytes: usize,
}
