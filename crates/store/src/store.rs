//! The key-value store engine.

use std::collections::HashMap;

use cubby_core::{Entry, Error, Result};
use parking_lot::Mutex;
use tracing::debug;

use crate::config::StoreConfig;

/// The key-value store.
///
/// A flat table mapping unique, non-empty keys to text values, with a hard
/// item-count quota. There are no phase or ordering constraints between
/// operations; any operation is valid at any time and either fully succeeds
/// or leaves the store unchanged.
///
/// # Thread Safety
///
/// All operations run under a single internal lock, so each one is atomic
/// with respect to concurrent callers. In particular the quota check and the
/// insert happen in the same critical section: a concurrent burst of N
/// creates against an empty store with quota 10 yields exactly `min(N, 10)`
/// successes and the rest fail with `QuotaExceeded`, with no two successes
/// sharing a key.
///
/// The lock is never held across an await point; every operation is a plain
/// map lookup or insert and completes in bounded time.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use cubby_store::KvStore;
///
/// let store = Arc::new(KvStore::new());
/// store.create("Key1", "Value1")?;
/// assert_eq!(store.len(), 1);
/// # Ok::<(), cubby_store::Error>(())
/// ```
pub struct KvStore {
    /// The entry mapping. The lock also guards the quota check-and-insert.
    entries: Mutex<HashMap<String, String>>,
    config: StoreConfig,
}

impl KvStore {
    /// Create an empty store with the default configuration.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Create an empty store with a specific configuration.
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            config,
        }
    }

    /// The configured capacity.
    pub fn quota(&self) -> usize {
        self.config.quota
    }

    /// Current number of entries.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Check whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Insert a new entry.
    ///
    /// Fails with [`Error::InvalidKey`] if `key` is empty, with
    /// [`Error::Conflict`] if an entry with `key` already exists (the stored
    /// value is left unchanged), and with [`Error::QuotaExceeded`] if the
    /// store is at capacity and `key` is not already present. The value may
    /// be empty.
    ///
    /// On success the store holds exactly one more entry and the new entry
    /// is returned.
    pub fn create(&self, key: &str, value: &str) -> Result<Entry> {
        validate_key(key)?;

        let mut entries = self.entries.lock();
        if entries.contains_key(key) {
            return Err(Error::Conflict(key.to_string()));
        }
        if entries.len() >= self.config.quota {
            debug!(key, quota = self.config.quota, "create rejected at capacity");
            return Err(Error::QuotaExceeded {
                quota: self.config.quota,
            });
        }
        entries.insert(key.to_string(), value.to_string());
        debug!(key, size = entries.len(), "entry created");

        Ok(Entry::new(key, value))
    }

    /// Replace the value of an existing entry.
    ///
    /// Fails with [`Error::InvalidKey`] if `key` is empty and with
    /// [`Error::NotFound`] if no entry with `key` exists. The entry count is
    /// unchanged; there is no quota interaction. The new value may be empty.
    pub fn update(&self, key: &str, value: &str) -> Result<Entry> {
        validate_key(key)?;

        let mut entries = self.entries.lock();
        match entries.get_mut(key) {
            Some(stored) => {
                *stored = value.to_string();
                debug!(key, "entry updated");
                Ok(Entry::new(key, value))
            }
            None => Err(Error::NotFound(key.to_string())),
        }
    }

    /// Look up a single entry.
    ///
    /// Returns `None` if the key is absent. Side-effect free.
    pub fn get(&self, key: &str) -> Option<Entry> {
        self.entries
            .lock()
            .get(key)
            .map(|value| Entry::new(key, value))
    }

    /// Return all entries.
    ///
    /// Order is unspecified; the length equals the current store size and
    /// the result may be empty. Side-effect free.
    pub fn entries(&self) -> Vec<Entry> {
        self.entries
            .lock()
            .iter()
            .map(|(key, value)| Entry::new(key, value))
            .collect()
    }

    /// Remove an entry.
    ///
    /// Fails with [`Error::InvalidKey`] if `key` is empty and with
    /// [`Error::NotFound`] if no entry with `key` exists (the store size is
    /// unchanged on failure). On success the removed entry is returned and
    /// the count decreases by exactly one.
    pub fn delete(&self, key: &str) -> Result<Entry> {
        validate_key(key)?;

        let mut entries = self.entries.lock();
        match entries.remove(key) {
            Some(value) => {
                debug!(key, size = entries.len(), "entry deleted");
                Ok(Entry::new(key, value))
            }
            None => Err(Error::NotFound(key.to_string())),
        }
    }
}

impl Default for KvStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Reject empty keys before touching the map.
fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(Error::InvalidKey("key must not be empty".to_string()));
    }
    Ok(())
}
