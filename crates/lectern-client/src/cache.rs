//! Shared response cache with a fixed time-to-live and bounded capacity.

use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

use lectern_core::{ContentRecord, ShareRef};
use lru::LruCache;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Tracing target for cache operations.
const TRACING_TARGET: &str = "lectern_client::cache";

/// Default number of entries kept before the least recently used is evicted.
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

/// Cache of content records keyed by share reference.
pub type ContentCache = ResponseCache<ShareRef, ContentRecord>;

struct Entry<V> {
    value: V,
    inserted_at: Instant,
}

/// Key/value store whose entries expire after a fixed lifetime.
///
/// Clones share the same storage. Expired entries are never returned; they
/// are dropped when read, when the cache is full, or by [`purge_expired`].
/// At capacity the least recently used entry makes room for a new one.
///
/// [`purge_expired`]: ResponseCache::purge_expired
pub struct ResponseCache<K, V> {
    entries: Arc<Mutex<LruCache<K, Entry<V>>>>,
    ttl: Duration,
}

impl<K, V> Clone for ResponseCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
            ttl: self.ttl,
        }
    }
}

impl<K, V> std::fmt::Debug for ResponseCache<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseCache")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl<K, V> ResponseCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Creates an empty cache of [`DEFAULT_CACHE_CAPACITY`] entries living for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self::with_capacity(ttl, DEFAULT_CACHE_CAPACITY)
    }

    /// Creates an empty cache holding at most `capacity` entries (at least one).
    pub fn with_capacity(ttl: Duration, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Arc::new(Mutex::new(LruCache::new(capacity))),
            ttl,
        }
    }

    /// Returns the entry lifetime.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the maximum number of stored entries.
    pub async fn capacity(&self) -> usize {
        self.entries.lock().await.cap().get()
    }

    /// Returns a fresh entry for `key`, evicting it if it has expired.
    pub async fn get(&self, key: &K) -> Option<V> {
        let mut entries = self.entries.lock().await;
        let entry = entries.get(key)?;
        if entry.inserted_at.elapsed() < self.ttl {
            return Some(entry.value.clone());
        }

        entries.pop(key);
        tracing::trace!(target: TRACING_TARGET, "evicted expired entry");
        None
    }

    /// Stores `value` under `key`, replacing any previous entry.
    ///
    /// A full cache first drops its expired entries and then, if still
    /// full, the least recently used one.
    pub async fn insert(&self, key: K, value: V) {
        let entry = Entry {
            value,
            inserted_at: Instant::now(),
        };

        let mut entries = self.entries.lock().await;
        if entries.len() == entries.cap().get() && !entries.contains(&key) {
            purge(&mut entries, self.ttl);
        }
        entries.put(key, entry);
    }

    /// Removes the entry for `key`, returning its value if it was still fresh.
    pub async fn invalidate(&self, key: &K) -> Option<V> {
        let entry = self.entries.lock().await.pop(key)?;
        (entry.inserted_at.elapsed() < self.ttl).then_some(entry.value)
    }

    /// Drops every expired entry and returns how many were removed.
    pub async fn purge_expired(&self) -> usize {
        purge(&mut *self.entries.lock().await, self.ttl)
    }

    /// Returns the number of stored entries, expired ones included.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    /// Returns `true` if nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

fn purge<K, V>(entries: &mut LruCache<K, Entry<V>>, ttl: Duration) -> usize
where
    K: Eq + Hash + Clone,
{
    let expired: Vec<K> = entries
        .iter()
        .filter(|(_, entry)| entry.inserted_at.elapsed() >= ttl)
        .map(|(key, _)| key.clone())
        .collect();

    for key in &expired {
        entries.pop(key);
    }

    if !expired.is_empty() {
        tracing::debug!(target: TRACING_TARGET, purged = expired.len(), "purged expired entries");
    }

    expired.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn returns_fresh_entries() {
        let cache = ResponseCache::new(Duration::from_secs(60));
        cache.insert("slide", 1).await;

        tokio::time::advance(Duration::from_secs(59)).await;
        assert_eq!(cache.get(&"slide").await, Some(1));
    }

    #[tokio::test(start_paused = true)]
    async fn never_returns_expired_entries() {
        let cache = ResponseCache::new(Duration::from_secs(60));
        cache.insert("slide", 1).await;

        tokio::time::advance(Duration::from_secs(60)).await;
        assert_eq!(cache.get(&"slide").await, None);
        assert!(cache.is_empty().await);
    }

    #[tokio::test(start_paused = true)]
    async fn purge_drops_only_expired_entries() {
        let cache = ResponseCache::new(Duration::from_secs(60));
        cache.insert("old", 1).await;
        tokio::time::advance(Duration::from_secs(45)).await;
        cache.insert("new", 2).await;
        tokio::time::advance(Duration::from_secs(30)).await;

        assert_eq!(cache.purge_expired().await, 1);
        assert_eq!(cache.len().await, 1);
        assert_eq!(cache.get(&"new").await, Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn unread_entries_never_exceed_capacity() {
        let cache = ResponseCache::with_capacity(Duration::from_secs(1), 100);
        for key in 0..5_000 {
            cache.insert(key, key).await;
        }
        assert_eq!(cache.len().await, 100);

        tokio::time::advance(Duration::from_secs(3600)).await;
        for key in 5_000..5_010 {
            cache.insert(key, key).await;
        }

        assert_eq!(cache.len().await, 10);
        assert_eq!(cache.get(&5_009).await, Some(5_009));
        assert_eq!(cache.get(&4_999).await, None);
    }

    #[tokio::test]
    async fn full_cache_evicts_least_recently_used() {
        let cache = ResponseCache::with_capacity(Duration::from_secs(60), 2);
        cache.insert("slide", 1).await;
        cache.insert("video", 2).await;
        assert_eq!(cache.get(&"slide").await, Some(1));

        cache.insert("study-tool", 3).await;
        assert_eq!(cache.get(&"video").await, None);
        assert_eq!(cache.get(&"slide").await, Some(1));
        assert_eq!(cache.capacity().await, 2);
    }

    #[tokio::test]
    async fn zero_capacity_holds_one_entry() {
        let cache = ResponseCache::with_capacity(Duration::from_secs(60), 0);
        cache.insert("a", 1).await;
        cache.insert("b", 2).await;
        assert_eq!(cache.len().await, 1);
        assert_eq!(cache.get(&"b").await, Some(2));
    }

    #[tokio::test]
    async fn clones_share_storage() {
        let cache = ResponseCache::new(Duration::from_secs(60));
        let other = cache.clone();
        cache.insert("video", 7).await;

        assert_eq!(other.get(&"video").await, Some(7));
        assert_eq!(other.invalidate(&"video").await, Some(7));
        assert_eq!(cache.get(&"video").await, None);
    }
}
