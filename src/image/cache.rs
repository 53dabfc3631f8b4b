//! LRU cache for fetched image responses.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

const DEFAULT_CAPACITY: usize = 100;

/// Bounded, thread-safe cache of raw image bytes keyed by URI.
///
/// Evicts the least recently used response when full.
pub struct ResponseCache {
    cache: Mutex<LruCache<String, Arc<[u8]>>>,
}

impl ResponseCache {
    /// Create new cache with given capacity.
    ///
    /// If capacity is 0, uses default of 100.
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity)
            .or(NonZeroUsize::new(DEFAULT_CAPACITY))
            .unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Cached response for `uri`, marking it most recently used.
    pub fn get(&self, uri: &str) -> Option<Arc<[u8]>> {
        self.lock().get(uri).cloned()
    }

    /// Store the response for `uri`.
    pub fn put(&self, uri: impl Into<String>, bytes: Arc<[u8]>) {
        self.lock().put(uri.into(), bytes);
    }

    /// Drop every cached response.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Number of cached responses.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if cache is empty.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Maximum number of responses kept.
    pub fn capacity(&self) -> usize {
        self.lock().cap().get()
    }

    // Poisoned locks are recovered: entries are whole values, never partial.
    fn lock(&self) -> MutexGuard<'_, LruCache<String, Arc<[u8]>>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl std::fmt::Debug for ResponseCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseCache")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}
