//! Per-item height memo.
//!
//! Keyed by item index only. Each entry remembers the column width it was
//! measured at, so callers can tell a stale entry from a valid one with
//! [`HeightCache::get_at`]. Entries never expire on their own; the
//! orchestrator calls [`HeightCache::invalidate_all`] when the width changes.

use std::collections::HashMap;

/// A measured height and the width it was measured at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightCacheEntry {
    /// Column width used for the measurement.
    pub width: f64,
    /// Resulting height.
    pub height: f64,
}

/// Memo of `item index → (width, height)`.
#[derive(Debug, Clone, Default)]
pub struct HeightCache {
    entries: HashMap<usize, HeightCacheEntry>,
}

impl HeightCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached height for `index`, regardless of the width it was measured at.
    ///
    /// Returns `None` for indices never stored, never a default height.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.entries.get(&index).map(|entry| entry.height)
    }

    /// Cached height for `index` only if it was measured at exactly `width`.
    pub fn get_at(&self, index: usize, width: f64) -> Option<f64> {
        self.entries
            .get(&index)
            .filter(|entry| entry.width == width)
            .map(|entry| entry.height)
    }

    /// Full cached entry for `index`.
    pub fn entry(&self, index: usize) -> Option<HeightCacheEntry> {
        self.entries.get(&index).copied()
    }

    /// Store the height measured for `index` at `width`, replacing any
    /// previous entry for that index.
    pub fn put(&mut self, index: usize, width: f64, height: f64) {
        self.entries.insert(index, HeightCacheEntry { width, height });
    }

    /// Drop every entry.
    pub fn invalidate_all(&mut self) {
        self.entries.clear();
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
