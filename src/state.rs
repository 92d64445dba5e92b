//! Application state management

use crate::cache::QueryCache;
use crate::config::AppConfig;
use crate::datasource::{create_data_source, MarketDataSource};
use crate::db::SqliteDb;
use crate::error::Result;
use crate::store::{PreferencesStore, WatchlistStore};
use std::sync::Arc;

/// Application state shared across all services
pub struct AppState {
    /// Startup configuration
    pub config: AppConfig,

    /// Local database holding persisted client state
    pub db: Arc<SqliteDb>,

    /// Selected market data source (remote or mock)
    pub source: Arc<dyn MarketDataSource>,

    /// Query cache shared by services and the refresh scheduler
    pub cache: Arc<QueryCache>,

    /// Persisted watchlist
    pub watchlist: WatchlistStore,

    /// Persisted preferences
    pub preferences: PreferencesStore,
}

impl AppState {
    /// Create new application state
    pub fn new(config: AppConfig) -> Result<Self> {
        std::fs::create_dir_all(&config.data_dir)?;
        tracing::info!("Data directory: {:?}", config.data_dir);

        let db = Arc::new(SqliteDb::new(&config.data_dir.join("marketdeck.db"))?);
        let source = create_data_source(&config)?;
        let cache = Arc::new(QueryCache::new());

        let watchlist = WatchlistStore::load(db.clone());
        let preferences = PreferencesStore::load(db.clone());
        tracing::info!(
            "Loaded {} watched symbols, theme {:?}",
            watchlist.len(),
            preferences.theme()
        );

        Ok(Self {
            config,
            db,
            source,
            cache,
            watchlist,
            preferences,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_state_boots_with_mock_source_and_empty_stores() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            api_base_url: None,
            data_dir: dir.path().to_path_buf(),
            http_timeout: Duration::from_secs(5),
        };

        let state = AppState::new(config).unwrap();
        assert_eq!(state.source.id(), "mock");
        assert!(state.watchlist.is_empty());
        assert!(state.cache.is_empty());
    }
}
