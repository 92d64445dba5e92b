//! Background refresh tasks
//!
//! One tokio task per subscribed cache key, ticking at the key's refresh
//! interval. The first tick fires immediately and primes the entry. A failed
//! refresh is logged and retried only at the next tick; the cache keeps the
//! last good value in the meantime.

use crate::cache::{QueryCache, QueryKey, RefreshPolicy};
use crate::error::Result;
use dashmap::DashMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

struct RefreshTask {
    shutdown: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

/// Spawns and tracks per-key refresh tasks
pub struct RefreshScheduler {
    cache: Arc<QueryCache>,
    tasks: DashMap<QueryKey, RefreshTask>,
}

impl RefreshScheduler {
    pub fn new(cache: Arc<QueryCache>) -> Self {
        Self {
            cache,
            tasks: DashMap::new(),
        }
    }

    /// Start a periodic refresh task for `key`. No-op when the key is
    /// already subscribed.
    pub fn subscribe<T, F, Fut>(&self, key: QueryKey, policy: RefreshPolicy, fetch: F)
    where
        T: Serialize + DeserializeOwned + Send + 'static,
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        if self.tasks.contains_key(&key) {
            debug!("refresh task already running for {}", key);
            return;
        }

        let (shutdown, mut signal) = watch::channel(false);
        let cache = self.cache.clone();
        let task_key = key.clone();

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(policy.refresh_interval);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            debug!("refresh task started for {}", task_key);

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        if let Err(e) = cache.refresh(&task_key, || fetch()).await {
                            warn!("refresh failed for {}: {}", task_key, e);
                        }
                    }
                    _ = signal.changed() => {
                        debug!("refresh task stopped for {}", task_key);
                        break;
                    }
                }
            }
        });

        self.tasks.insert(key, RefreshTask { shutdown, handle });
    }

    /// Stop the refresh task for one key. An in-flight refresh is allowed to
    /// finish; the cache entry itself is left intact.
    pub fn unsubscribe(&self, key: &QueryKey) {
        if let Some((_, task)) = self.tasks.remove(key) {
            let _ = task.shutdown.send(true);
        }
    }

    /// Stop every refresh task immediately
    pub fn shutdown(&self) {
        let keys: Vec<QueryKey> = self.tasks.iter().map(|entry| entry.key().clone()).collect();
        for key in keys {
            if let Some((_, task)) = self.tasks.remove(&key) {
                let _ = task.shutdown.send(true);
                task.handle.abort();
            }
        }
    }

    pub fn is_subscribed(&self, key: &QueryKey) -> bool {
        self.tasks.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    const TICK: RefreshPolicy = RefreshPolicy {
        refresh_interval: Duration::from_millis(20),
        stale_after: Duration::from_millis(20),
    };

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_subscribe_primes_and_refreshes() {
        let cache = Arc::new(QueryCache::new());
        let scheduler = RefreshScheduler::new(cache.clone());
        let calls = Arc::new(AtomicUsize::new(0));
        let key = QueryKey::new("market.snapshot", &());

        let counter = calls.clone();
        scheduler.subscribe(key.clone(), TICK, move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok::<u32, AppError>(7)
            }
        });
        assert!(scheduler.is_subscribed(&key));

        tokio::time::sleep(Duration::from_millis(90)).await;
        let seen = calls.load(Ordering::SeqCst);
        assert!(seen >= 2, "expected repeated refreshes, saw {}", seen);

        let cached = cache
            .get_or_fetch(key.clone(), TICK, || async { panic!("primed by scheduler") })
            .await
            .unwrap();
        assert_eq!(cached.value, Some(7));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_unsubscribe_stops_refreshing() {
        let cache = Arc::new(QueryCache::new());
        let scheduler = RefreshScheduler::new(cache.clone());
        let calls = Arc::new(AtomicUsize::new(0));
        let key = QueryKey::new("market.sectors", &());

        let counter = calls.clone();
        scheduler.subscribe(key.clone(), TICK, move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok::<u32, AppError>(1)
            }
        });

        tokio::time::sleep(Duration::from_millis(50)).await;
        scheduler.unsubscribe(&key);
        assert!(!scheduler.is_subscribed(&key));

        // Let any in-flight tick land before sampling the count
        tokio::time::sleep(Duration::from_millis(40)).await;
        let after_stop = calls.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(calls.load(Ordering::SeqCst), after_stop);

        // The cache entry survives unsubscription
        assert_ne!(
            cache.state(&key, TICK),
            crate::cache::QueryState::Empty
        );
    }

    #[tokio::test]
    async fn test_subscribe_same_key_twice_is_noop() {
        let cache = Arc::new(QueryCache::new());
        let scheduler = RefreshScheduler::new(cache);
        let key = QueryKey::new("market.status", &());

        scheduler.subscribe(key.clone(), TICK, || async { Ok::<u32, AppError>(1) });
        scheduler.subscribe(key.clone(), TICK, || async { Ok::<u32, AppError>(2) });
        assert_eq!(scheduler.len(), 1);

        scheduler.shutdown();
        assert!(scheduler.is_empty());
    }
}
