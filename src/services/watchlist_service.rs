//! Watchlist Service
//!
//! Watchlist mutations delegate to the persisted store; the quote join
//! reuses the quotes path so the watchlist panel shares its cache entry
//! with any other consumer of the same symbol set.

use crate::cache::Cached;
use crate::datasource::types::StockData;
use crate::error::Result;
use crate::services::quotes_service::QuotesService;
use crate::state::AppState;
use tracing::info;

/// Watchlist service for business logic
pub struct WatchlistService;

impl WatchlistService {
    /// Add a symbol to the watchlist
    pub fn add(state: &AppState, symbol: &str) -> bool {
        info!("WatchlistService::add - {}", symbol);
        state.watchlist.add(symbol)
    }

    /// Remove a symbol from the watchlist
    pub fn remove(state: &AppState, symbol: &str) -> bool {
        info!("WatchlistService::remove - {}", symbol);
        state.watchlist.remove(symbol)
    }

    /// Toggle a symbol; returns the new membership state
    pub fn toggle(state: &AppState, symbol: &str) -> bool {
        info!("WatchlistService::toggle - {}", symbol);
        state.watchlist.toggle(symbol)
    }

    /// Empty the watchlist
    pub fn clear(state: &AppState) {
        info!("WatchlistService::clear");
        state.watchlist.clear();
    }

    /// Membership test
    pub fn has(state: &AppState, symbol: &str) -> bool {
        state.watchlist.has(symbol)
    }

    /// Watched symbols in insertion order
    pub fn symbols(state: &AppState) -> Vec<String> {
        state.watchlist.symbols()
    }

    /// Quotes for every watched symbol
    pub async fn get_watchlist_quotes(state: &AppState) -> Result<Cached<Vec<StockData>>> {
        let symbols = state.watchlist.symbols();
        QuotesService::get_quotes(state, &symbols).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::QueryState;
    use crate::config::AppConfig;
    use std::time::Duration;

    fn test_state() -> (tempfile::TempDir, AppState) {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            api_base_url: None,
            data_dir: dir.path().to_path_buf(),
            http_timeout: Duration::from_secs(5),
        };
        let state = AppState::new(config).unwrap();
        (dir, state)
    }

    #[tokio::test]
    async fn test_watchlist_quotes_follow_the_store() {
        let (_dir, state) = test_state();

        let empty = WatchlistService::get_watchlist_quotes(&state).await.unwrap();
        assert_eq!(empty.state, QueryState::Ready);
        assert!(empty.value.unwrap().is_empty());

        WatchlistService::add(&state, "aapl");
        WatchlistService::toggle(&state, "nvda");
        assert!(WatchlistService::has(&state, "AAPL"));
        assert_eq!(WatchlistService::symbols(&state), vec!["AAPL", "NVDA"]);

        let quotes = WatchlistService::get_watchlist_quotes(&state)
            .await
            .unwrap()
            .value
            .unwrap();
        let symbols: Vec<&str> = quotes.iter().map(|q| q.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["AAPL", "NVDA"]);
    }

    #[tokio::test]
    async fn test_clear_empties_the_store() {
        let (_dir, state) = test_state();
        WatchlistService::add(&state, "AAPL");
        WatchlistService::clear(&state);
        assert!(WatchlistService::symbols(&state).is_empty());
    }
}
