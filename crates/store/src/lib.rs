//! The Cubby store engine.
//!
//! A single-table key-value store with unique keys, key validation, and a
//! hard item-count quota. All state lives in memory; the store is created
//! empty at service start and torn down at process exit.
//!
//! ## Quick Start
//!
//! ```
//! use cubby_store::KvStore;
//!
//! let store = KvStore::new();
//!
//! store.create("user:1", "Alice")?;
//! let entry = store.update("user:1", "Bob")?;
//! assert_eq!(entry.value, "Bob");
//!
//! let removed = store.delete("user:1")?;
//! assert_eq!(removed.value, "Bob");
//! # Ok::<(), cubby_store::Error>(())
//! ```
//!
//! ## Concurrency
//!
//! Every operation executes under a single critical section per store, so
//! the duplicate-key check and the quota check-and-insert are atomic with
//! respect to concurrent callers. See [`KvStore`] for details.

#![warn(missing_docs)]

mod config;
mod store;

pub use config::{StoreConfig, DEFAULT_QUOTA};
pub use store::KvStore;

// Re-export the shared vocabulary
pub use cubby_core::{Entry, Error, Result};
