// In-memory cache entries with TTL-based freshness.
// Entries age out implicitly via the freshness check; nothing is evicted by size.

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};

/// How long a cached value stays fresh: 5 minutes.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// A cached value paired with its retrieval timestamp.
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    pub data: T,
    pub fetched_at: DateTime<Utc>,
}

impl<T> CacheEntry<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            fetched_at: Utc::now(),
        }
    }

    /// Fresh while the elapsed time since retrieval is under `ttl`.
    pub fn is_fresh(&self, ttl: Duration) -> bool {
        let elapsed = Utc::now()
            .signed_duration_since(self.fetched_at)
            .to_std()
            .unwrap_or(Duration::MAX);

        elapsed < ttl
    }
}

/// Keyed cache of `CacheEntry` values. Stale entries are simply skipped on
/// read and overwritten on the next successful fetch.
#[derive(Debug)]
pub struct TtlCache<T> {
    entries: HashMap<String, CacheEntry<T>>,
}

impl<T: Clone> TtlCache<T> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Return a clone of the cached value if the entry exists and is fresh.
    pub fn get_fresh(&self, key: &str, ttl: Duration) -> Option<T> {
        self.entries
            .get(key)
            .filter(|entry| entry.is_fresh(ttl))
            .map(|entry| entry.data.clone())
    }

    /// Store a value with the current timestamp, replacing any prior entry.
    pub fn insert(&mut self, key: impl Into<String>, data: T) {
        self.entries.insert(key.into(), CacheEntry::new(data));
    }
}

impl<T: Clone> Default for TtlCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
