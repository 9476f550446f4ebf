//! Time-bounded page cache.
//!
//! Holds rendered pages for a fixed TTL. Entries are never refreshed by
//! writes to the store: a new post shows up once its page expires or the
//! cache is cleared. The number of entries is capped; past the cap the
//! least useful pages are evicted.

use std::fmt;
use std::time::Duration;

use moka::sync::Cache;
use tracing::debug;

/// Default upper bound on cached pages.
pub const DEFAULT_MAX_ENTRIES: u64 = 300;

/// Keyed cache whose entries expire `ttl` after they were stored.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use yatube::feed::PageCache;
///
/// let cache = PageCache::new(Duration::from_secs(20));
/// assert!(cache.get("index:1").is_none());
///
/// cache.insert("index:1", "rendered".to_string());
/// assert_eq!(cache.get("index:1").as_deref(), Some("rendered"));
///
/// cache.clear();
/// assert!(cache.get("index:1").is_none());
/// ```
pub struct PageCache<V = String> {
    ttl: Duration,
    max_entries: u64,
    entries: Cache<String, V>,
}

impl<V: Clone + Send + Sync + 'static> PageCache<V> {
    /// Create an empty cache with the given time-to-live and the default cap.
    pub fn new(ttl: Duration) -> Self {
        Self::with_capacity(ttl, DEFAULT_MAX_ENTRIES)
    }

    /// Create an empty cache holding at most `max_entries` pages.
    pub fn with_capacity(ttl: Duration, max_entries: u64) -> Self {
        let entries = Cache::builder()
            .max_capacity(max_entries)
            .time_to_live(ttl)
            .build();

        Self {
            ttl,
            max_entries,
            entries,
        }
    }

    /// Time-to-live of an entry.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Maximum number of entries kept.
    pub fn max_entries(&self) -> u64 {
        self.max_entries
    }

    /// Get a fresh entry. Expired entries read as absent.
    pub fn get(&self, key: &str) -> Option<V> {
        self.entries.get(key)
    }

    /// Store a value, replacing any previous entry for the key.
    pub fn insert(&self, key: impl Into<String>, value: V) {
        let key = key.into();
        debug!(key = %key, "page cached");
        self.entries.insert(key, value);
    }

    /// Drop one entry. Returns true if the key was present.
    pub fn invalidate(&self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Drop every entry.
    pub fn clear(&self) {
        debug!("page cache cleared");
        self.entries.invalidate_all();
        self.entries.run_pending_tasks();
    }

    /// Evict expired entries now rather than on the next maintenance pass.
    pub fn purge_expired(&self) {
        self.entries.run_pending_tasks();
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.entries.run_pending_tasks();
        self.entries.entry_count() as usize
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V> fmt::Debug for PageCache<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageCache")
            .field("ttl", &self.ttl)
            .field("max_entries", &self.max_entries)
            .finish_non_exhaustive()
    }
}
