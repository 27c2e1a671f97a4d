//! OpalKV - A minimal in-process key-value store
//!
//! OpalKV keeps an entire data set resident in memory behind a small CRUD
//! contract:
//! - Callers depend on the `Store` trait, never on a concrete engine
//! - The in-memory engine serializes all access through one exclusive lock
//! - Keys and values are opaque byte sequences

pub mod store;

/// Re-export commonly used types
pub use store::{MemoryStore, Store, StoreError, StoreStats};
