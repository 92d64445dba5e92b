//! Keyed query cache with single-flight fetches
//!
//! Entries move through `Empty -> Loading -> Ready -> Stale -> Refreshing`
//! and back to `Ready`. A failed refresh keeps the previous snapshot and
//! raises the error flag instead of clearing what consumers see. Values are
//! stored as JSON snapshots and replaced wholesale, never mutated in place.

use crate::cache::policy::RefreshPolicy;
use crate::error::Result;
use dashmap::DashMap;
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Deterministic cache key: operation name plus serialized parameters.
/// Identical requests hash to the same key and share one in-flight fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    op: String,
    params: String,
}

impl QueryKey {
    pub fn new<P: Serialize>(op: &str, params: &P) -> Self {
        let params =
            serde_json::to_string(params).expect("query parameters serialize to JSON");
        Self {
            op: op.to_string(),
            params,
        }
    }

    pub fn op(&self) -> &str {
        &self.op
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.op, self.params)
    }
}

/// Observable lifecycle of one cache entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryState {
    Empty,
    Loading,
    Ready,
    Stale,
    Refreshing,
    Error,
}

/// Snapshot handed to consumers along with its entry state
#[derive(Debug, Clone)]
pub struct Cached<T> {
    pub value: Option<T>,
    pub state: QueryState,
    pub is_error: bool,
    pub age: Option<Duration>,
}

impl<T> Cached<T> {
    /// A value that did not go through the cache (trivial or short-circuited
    /// results)
    pub fn ready(value: T) -> Self {
        Self {
            value: Some(value),
            state: QueryState::Ready,
            is_error: false,
            age: Some(Duration::ZERO),
        }
    }
}

#[derive(Debug, Default)]
struct EntryData {
    value: Option<serde_json::Value>,
    fetched_at: Option<Instant>,
    in_flight: bool,
    is_error: bool,
}

struct CacheSlot {
    data: RwLock<EntryData>,
    /// Serializes fetches for this key; waiters re-check the entry after
    /// acquiring it instead of issuing their own request
    fetch_lock: tokio::sync::Mutex<()>,
}

impl CacheSlot {
    fn new() -> Self {
        Self {
            data: RwLock::new(EntryData::default()),
            fetch_lock: tokio::sync::Mutex::new(()),
        }
    }
}

/// Shared query cache keyed by operation + parameters
pub struct QueryCache {
    slots: DashMap<QueryKey, Arc<CacheSlot>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self {
            slots: DashMap::new(),
        }
    }

    fn slot(&self, key: &QueryKey) -> Arc<CacheSlot> {
        self.slots
            .entry(key.clone())
            .or_insert_with(|| Arc::new(CacheSlot::new()))
            .clone()
    }

    /// State a consumer would observe for this key right now
    pub fn state(&self, key: &QueryKey, policy: RefreshPolicy) -> QueryState {
        match self.slots.get(key) {
            None => QueryState::Empty,
            Some(slot) => effective_state(&slot.data.read(), policy),
        }
    }

    /// Serve the cached snapshot for `key`, loading it on first use.
    ///
    /// A present value is always served, fresh or stale; only its reported
    /// state differs. When no value exists yet, concurrent callers coalesce
    /// onto a single underlying fetch.
    pub async fn get_or_fetch<T, F, Fut>(
        &self,
        key: QueryKey,
        policy: RefreshPolicy,
        fetch: F,
    ) -> Result<Cached<T>>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let slot = self.slot(&key);

        if let Some(cached) = read_entry(&slot, policy)? {
            return Ok(cached);
        }

        let _guard = slot.fetch_lock.lock().await;

        // Another caller may have completed the load while we waited
        if let Some(cached) = read_entry(&slot, policy)? {
            return Ok(cached);
        }

        slot.data.write().in_flight = true;
        tracing::debug!("cache load: {}", key);

        let outcome = fetch().await;
        let mut data = slot.data.write();
        data.in_flight = false;

        match outcome {
            Ok(value) => {
                let snapshot = serde_json::to_value(&value)?;
                data.value = Some(snapshot);
                data.fetched_at = Some(Instant::now());
                data.is_error = false;
                Ok(Cached {
                    value: Some(value),
                    state: QueryState::Ready,
                    is_error: false,
                    age: Some(Duration::ZERO),
                })
            }
            Err(e) => {
                data.is_error = true;
                Err(e)
            }
        }
    }

    /// Forced background refresh for `key`, used by the scheduler.
    ///
    /// On failure the previous snapshot is retained and the error flag is
    /// raised; there is no retry before the next scheduled tick.
    pub async fn refresh<T, F, Fut>(&self, key: &QueryKey, fetch: F) -> Result<()>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let slot = self.slot(key);
        let _guard = slot.fetch_lock.lock().await;

        slot.data.write().in_flight = true;

        let outcome = fetch().await;
        let mut data = slot.data.write();
        data.in_flight = false;

        match outcome {
            Ok(value) => {
                data.value = Some(serde_json::to_value(&value)?);
                data.fetched_at = Some(Instant::now());
                data.is_error = false;
                Ok(())
            }
            Err(e) => {
                data.is_error = true;
                Err(e)
            }
        }
    }

    /// Drop one entry
    pub fn invalidate(&self, key: &QueryKey) {
        self.slots.remove(key);
    }

    /// Drop every entry
    pub fn invalidate_all(&self) {
        self.slots.clear();
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode the stored snapshot if one exists
fn read_entry<T: DeserializeOwned>(
    slot: &CacheSlot,
    policy: RefreshPolicy,
) -> Result<Option<Cached<T>>> {
    let data = slot.data.read();
    match &data.value {
        None => Ok(None),
        Some(snapshot) => {
            let value: T = serde_json::from_value(snapshot.clone())?;
            Ok(Some(Cached {
                value: Some(value),
                state: effective_state(&data, policy),
                is_error: data.is_error,
                age: data.fetched_at.map(|t| t.elapsed()),
            }))
        }
    }
}

fn effective_state(data: &EntryData, policy: RefreshPolicy) -> QueryState {
    match (&data.value, data.in_flight) {
        (None, true) => QueryState::Loading,
        (None, false) => {
            if data.is_error {
                QueryState::Error
            } else {
                QueryState::Empty
            }
        }
        (Some(_), true) => QueryState::Refreshing,
        (Some(_), false) => {
            if data.is_error {
                return QueryState::Stale;
            }
            let stale = data
                .fetched_at
                .map(|t| t.elapsed() >= policy.stale_after)
                .unwrap_or(true);
            if stale {
                QueryState::Stale
            } else {
                QueryState::Ready
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const FRESH: RefreshPolicy = RefreshPolicy::new(60, 60);
    const INSTANTLY_STALE: RefreshPolicy = RefreshPolicy::new(60, 0);

    #[test]
    fn test_key_is_deterministic() {
        let symbols = vec!["AAPL".to_string(), "MSFT".to_string()];
        let a = QueryKey::new("stocks", &symbols);
        let b = QueryKey::new("stocks", &symbols);
        assert_eq!(a, b);
        assert_eq!(a.to_string(), r#"stocks(["AAPL","MSFT"])"#);

        let c = QueryKey::new("stocks", &vec!["MSFT".to_string(), "AAPL".to_string()]);
        assert_ne!(a, c);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_concurrent_fetches_issue_one_request() {
        let cache = Arc::new(QueryCache::new());
        let calls = Arc::new(AtomicUsize::new(0));
        let key = QueryKey::new("market.snapshot", &());

        let fetch = |calls: Arc<AtomicUsize>| async move {
            calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(50)).await;
            Ok::<u32, AppError>(42)
        };

        let (a, b) = tokio::join!(
            cache.get_or_fetch(key.clone(), FRESH, {
                let calls = calls.clone();
                move || fetch(calls)
            }),
            cache.get_or_fetch(key.clone(), FRESH, {
                let calls = calls.clone();
                move || fetch(calls)
            }),
        );

        assert_eq!(a.unwrap().value, Some(42));
        assert_eq!(b.unwrap().value, Some(42));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_fresh_value_served_without_refetch() {
        let cache = QueryCache::new();
        let calls = AtomicUsize::new(0);
        let key = QueryKey::new("market.sectors", &());

        for _ in 0..3 {
            let cached = cache
                .get_or_fetch(key.clone(), FRESH, || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok::<String, AppError>("sectors".to_string())
                })
                .await
                .unwrap();
            assert_eq!(cached.state, QueryState::Ready);
            assert!(!cached.is_error);
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_stale_value_still_served() {
        let cache = QueryCache::new();
        let key = QueryKey::new("market.status", &());

        cache
            .get_or_fetch(key.clone(), INSTANTLY_STALE, || async {
                Ok::<u32, AppError>(1)
            })
            .await
            .unwrap();

        // Past its staleness window the old snapshot is still displayed;
        // only the reported state changes. No new request is issued here.
        let cached = cache
            .get_or_fetch(key.clone(), INSTANTLY_STALE, || async {
                panic!("stale hit must not refetch")
            })
            .await
            .unwrap();
        assert_eq!(cached.value, Some(1));
        assert_eq!(cached.state, QueryState::Stale);
    }

    #[tokio::test]
    async fn test_failed_refresh_retains_last_good_value() {
        let cache = QueryCache::new();
        let key = QueryKey::new("market.news", &6);

        cache
            .get_or_fetch(key.clone(), FRESH, || async { Ok::<u32, AppError>(1) })
            .await
            .unwrap();

        let err = cache
            .refresh(&key, || async {
                Err::<u32, _>(AppError::Internal("backend down".to_string()))
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));

        let cached = cache
            .get_or_fetch(key.clone(), FRESH, || async {
                panic!("cached value must be served")
            })
            .await
            .unwrap();
        assert_eq!(cached.value, Some(1));
        assert!(cached.is_error);
        assert_eq!(cached.state, QueryState::Stale);
    }

    #[tokio::test]
    async fn test_successful_refresh_replaces_value_and_clears_error() {
        let cache = QueryCache::new();
        let key = QueryKey::new("market.snapshot", &());

        cache
            .get_or_fetch(key.clone(), FRESH, || async { Ok::<u32, AppError>(1) })
            .await
            .unwrap();
        let _ = cache
            .refresh(&key, || async {
                Err::<u32, _>(AppError::Internal("transient".to_string()))
            })
            .await;
        cache
            .refresh(&key, || async { Ok::<u32, AppError>(2) })
            .await
            .unwrap();

        let cached = cache
            .get_or_fetch(key.clone(), FRESH, || async {
                panic!("cached value must be served")
            })
            .await
            .unwrap();
        assert_eq!(cached.value, Some(2));
        assert!(!cached.is_error);
        assert_eq!(cached.state, QueryState::Ready);
    }

    #[tokio::test]
    async fn test_initial_failure_reports_error_state() {
        let cache = QueryCache::new();
        let key = QueryKey::new("market.earnings", &8);

        let err = cache
            .get_or_fetch(key.clone(), FRESH, || async {
                Err::<u32, _>(AppError::Internal("no backend".to_string()))
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
        assert_eq!(cache.state(&key, FRESH), QueryState::Error);
    }

    #[tokio::test]
    async fn test_invalidate() {
        let cache = QueryCache::new();
        let key = QueryKey::new("market.sectors", &());

        cache
            .get_or_fetch(key.clone(), FRESH, || async { Ok::<u32, AppError>(1) })
            .await
            .unwrap();
        assert_eq!(cache.len(), 1);

        cache.invalidate(&key);
        assert!(cache.is_empty());
        assert_eq!(cache.state(&key, FRESH), QueryState::Empty);
    }
}
