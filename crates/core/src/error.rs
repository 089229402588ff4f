//! Unified error types for Cubby.
//!
//! Every precondition violation in the store surfaces as one of the variants
//! here; the store never silently succeeds on an invalid request and never
//! partially applies a mutation.

use thiserror::Error;

/// All Cubby errors.
///
/// This is the canonical error type for all store operations. The HTTP
/// adapter maps every variant to a `400` response.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// Empty or missing key on an operation that requires one.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// Create called with a key that already exists.
    #[error("key already exists: {0}")]
    Conflict(String),

    /// Update or delete called with a key absent from the store.
    #[error("key not found: {0}")]
    NotFound(String),

    /// Create called when the store is at capacity and the key is new.
    #[error("store is at capacity ({quota} entries)")]
    QuotaExceeded {
        /// The configured capacity that was hit.
        quota: usize,
    },
}

/// Result type for Cubby operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Check if this is a duplicate-key conflict.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Error::Conflict(_))
    }

    /// Check if this error was caused by the capacity quota.
    pub fn is_quota_exceeded(&self) -> bool {
        matches!(self, Error::QuotaExceeded { .. })
    }
}
