//! Cached database health checks.
//!
//! The `/api/health` route is polled by load balancers and uptime monitors,
//! so the result of a Postgres round-trip is kept for a configurable TTL and
//! reused by every request that arrives within it.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use axum::extract::FromRef;
use lectern_postgres::PgClient;
use tokio::sync::RwLock;
use tokio::time::Instant;

/// Tracing target for health service operations.
const TRACING_TARGET_HEALTH: &str = "lectern_server::service::health";

/// Default cache duration for health checks.
const DEFAULT_CACHE_DURATION: Duration = Duration::from_secs(30);

#[derive(Debug)]
struct HealthCacheEntry {
    is_healthy: AtomicBool,
    /// `None` until the first check completes.
    last_check: RwLock<Option<Instant>>,
    cache_duration: Duration,
}

impl HealthCacheEntry {
    fn new(cache_duration: Duration) -> Self {
        Self {
            is_healthy: AtomicBool::new(false),
            last_check: RwLock::new(None),
            cache_duration,
        }
    }

    /// Returns the cached status, or runs `check_fn` and stores its result if
    /// the cache is empty or expired.
    async fn get_or_update<F, Fut>(&self, check_fn: F) -> bool
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = bool>,
    {
        let last_check = { *self.last_check.read().await };
        if let Some(last_check) = last_check
            && last_check.elapsed() < self.cache_duration
        {
            return self.is_healthy.load(Ordering::Relaxed);
        }

        let healthy = check_fn().await;

        self.is_healthy.store(healthy, Ordering::Relaxed);
        *self.last_check.write().await = Some(Instant::now());

        healthy
    }

    fn get_cached(&self) -> bool {
        self.is_healthy.load(Ordering::Relaxed)
    }

    async fn invalidate(&self) {
        *self.last_check.write().await = None;
    }
}

/// Health monitoring service with atomic boolean caching.
///
/// Clones share the same cache entry.
///
/// ```no_run
/// # use lectern_server::service::HealthCache;
/// # use std::time::Duration;
/// # async fn example() {
/// let health = HealthCache::with_cache_duration(Duration::from_secs(60));
///
/// // Fast cached read without any checks
/// let cached = health.get_cached_health();
///
/// // Force next check to be fresh
/// health.invalidate().await;
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HealthCache {
    cache: Arc<HealthCacheEntry>,
}

impl HealthCache {
    /// Creates a health cache with the default duration of 30 seconds.
    pub fn new() -> Self {
        Self::with_cache_duration(DEFAULT_CACHE_DURATION)
    }

    /// Creates a health cache with a custom cache duration.
    pub fn with_cache_duration(cache_duration: Duration) -> Self {
        tracing::info!(
            target: TRACING_TARGET_HEALTH,
            cache_duration_secs = cache_duration.as_secs(),
            "health service initialized"
        );

        Self {
            cache: Arc::new(HealthCacheEntry::new(cache_duration)),
        }
    }

    /// Returns whether the database is reachable, checking at most once per
    /// cache duration.
    pub async fn is_healthy<S>(&self, service_state: &S) -> bool
    where
        PgClient: FromRef<S>,
    {
        let pg_client = PgClient::from_ref(service_state);
        self.cache
            .get_or_update(|| Self::check_database(&pg_client))
            .await
    }

    /// Returns the last cached status without performing a check.
    pub fn get_cached_health(&self) -> bool {
        self.cache.get_cached()
    }

    /// Forces a fresh check on the next access.
    pub async fn invalidate(&self) {
        self.cache.invalidate().await;

        tracing::debug!(
            target: TRACING_TARGET_HEALTH,
            "health cache invalidated"
        );
    }

    #[tracing::instrument(skip_all, target = TRACING_TARGET_HEALTH)]
    async fn check_database(pg_client: &PgClient) -> bool {
        let start = Instant::now();
        let result = pg_client.ping().await;
        let duration_ms = start.elapsed().as_millis();

        match result {
            Ok(()) => {
                tracing::debug!(
                    target: TRACING_TARGET_HEALTH,
                    duration_ms,
                    "postgres health check passed"
                );
                true
            }
            Err(e) => {
                tracing::warn!(
                    target: TRACING_TARGET_HEALTH,
                    error = %e,
                    duration_ms,
                    "postgres health check failed"
                );
                false
            }
        }
    }
}

impl Default for HealthCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;

    use super::*;

    #[test]
    fn entry_starts_unhealthy() {
        let entry = HealthCacheEntry::new(Duration::from_secs(30));
        assert!(!entry.get_cached());
    }

    #[tokio::test]
    async fn entry_reuses_result_within_ttl() {
        let entry = HealthCacheEntry::new(Duration::from_secs(1));

        assert!(entry.get_or_update(|| async { true }).await);
        assert!(entry.get_cached());

        // Still cached, so the failing check is not run.
        assert!(entry.get_or_update(|| async { false }).await);
    }

    #[tokio::test(start_paused = true)]
    async fn entry_rechecks_after_expiry() {
        let entry = HealthCacheEntry::new(Duration::from_secs(10));
        let checks = AtomicUsize::new(0);
        let check = |healthy: bool| {
            checks.fetch_add(1, Ordering::SeqCst);
            async move { healthy }
        };

        assert!(entry.get_or_update(|| check(true)).await);
        tokio::time::advance(Duration::from_secs(9)).await;
        assert!(entry.get_or_update(|| check(false)).await);
        assert_eq!(checks.load(Ordering::SeqCst), 1);

        tokio::time::advance(Duration::from_secs(2)).await;
        assert!(!entry.get_or_update(|| check(false)).await);
        assert_eq!(checks.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn entry_invalidation_forces_check() {
        let entry = HealthCacheEntry::new(Duration::from_secs(60));

        entry.get_or_update(|| async { true }).await;
        entry.invalidate().await;

        assert!(!entry.get_or_update(|| async { false }).await);
    }

    #[tokio::test]
    async fn service_clones_share_state() {
        let service = HealthCache::new();
        let clone = service.clone();

        service.cache.get_or_update(|| async { true }).await;
        assert!(clone.get_cached_health());

        clone.invalidate().await;
        assert!(!service.cache.get_or_update(|| async { false }).await);
    }
}
