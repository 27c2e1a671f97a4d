//! Store error types

use thiserror::Error;

/// Errors returned by store operations.
///
/// There are exactly three kinds. Every error reaches the caller
/// synchronously; retry policy is entirely a caller concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The key failed a structural precondition (zero length).
    /// Raised only by create.
    #[error("invalid key: cannot have zero length")]
    InvalidKey,

    /// Create was invoked with a key that is already registered.
    #[error("key already exists")]
    AlreadyExists,

    /// Read, update, or delete was invoked with an unregistered key.
    #[error("key does not exist")]
    NotFound,
}
