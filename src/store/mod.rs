//! Key-value store module
//!
//! Provides the storage contract and the in-memory engine behind it.
//! Callers are written against the `Store` trait (loose coupling), so an
//! engine can be swapped without touching calling code.

mod error;
mod hash;
mod memory;

pub use error::StoreError;
pub use hash::KeyHasher;
pub use memory::{MemoryStore, StoreStats};

use async_trait::async_trait;
use bytes::Bytes;
use tokio_util::sync::CancellationToken;

/// Storage contract shared by every engine variant.
///
/// Each operation accepts a cancellation token so callers can compose
/// shutdown signals and deadlines around store access (for example with
/// `tokio::time::timeout`). An engine must accept the token but is not
/// required to honor it mid-operation; the in-memory engine runs every
/// started operation to completion.
///
/// Errors are returned synchronously and never leave partial state behind:
/// an operation either takes full effect or none at all.
#[async_trait]
pub trait Store: Send + Sync {
    /// Register a new entry under `key`.
    ///
    /// The key must be non-empty and not already registered. After a
    /// successful create, `read` with the same key returns `value`.
    async fn create(
        &self,
        cancel: &CancellationToken,
        key: Bytes,
        value: Bytes,
    ) -> Result<(), StoreError>;

    /// Return the value currently associated with `key`.
    ///
    /// No side effects. The returned `Bytes` may share storage with the
    /// entry inside the engine; it stays valid even if the entry is later
    /// updated or deleted.
    async fn read(&self, cancel: &CancellationToken, key: &[u8]) -> Result<Bytes, StoreError>;

    /// Replace the value of an existing `key`.
    ///
    /// Fails with `NotFound` if the key is not registered; never creates it.
    async fn update(
        &self,
        cancel: &CancellationToken,
        key: &[u8],
        value: Bytes,
    ) -> Result<(), StoreError>;

    /// Remove the entry for `key`, which must exist.
    async fn delete(&self, cancel: &CancellationToken, key: &[u8]) -> Result<(), StoreError>;
}
