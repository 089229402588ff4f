//! Shared application state.

use std::sync::Arc;

use cubby_store::KvStore;

/// State handed to every handler.
///
/// Holds the one store instance for the process. Created once at service
/// start; axum clones the handle per request, all clones share the same
/// store.
#[derive(Clone)]
pub struct AppState {
    /// The store backing the service.
    pub store: Arc<KvStore>,
}

impl AppState {
    /// Create state around a fresh store with the default configuration.
    pub fn new() -> Self {
        Self::with_store(KvStore::new())
    }

    /// Create state around a specific store.
    pub fn with_store(store: KvStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
