//! Quotes Service
//!
//! Quote retrieval for arbitrary symbol lists plus the curated dashboard
//! screens (top market cap, daily movers, by-sector). All reads go through
//! the query cache under the quotes policy.

use crate::cache::{policy, Cached, QueryKey};
use crate::datasource::types::StockData;
use crate::datasource::{
    normalize_symbol, sector_symbols, DAILY_MOVER_SYMBOLS, TOP_MARKET_CAP_SYMBOLS,
};
use crate::error::{AppError, Result};
use crate::state::AppState;
use tracing::info;

/// Default number of rows in the top-market-cap panel
const DEFAULT_TOP_LIMIT: usize = 10;

/// Quotes service for business logic
pub struct QuotesService;

impl QuotesService {
    pub(crate) fn quotes_key(symbols: &[String]) -> QueryKey {
        QueryKey::new("stocks", &symbols)
    }

    pub(crate) fn quote_key(symbol: &str) -> QueryKey {
        QueryKey::new("stock", &symbol)
    }

    /// Get quotes for one or more symbols
    pub async fn get_quotes(
        state: &AppState,
        symbols: &[String],
    ) -> Result<Cached<Vec<StockData>>> {
        let symbols: Vec<String> = symbols
            .iter()
            .map(|s| normalize_symbol(s))
            .filter(|s| !s.is_empty())
            .collect();

        if symbols.is_empty() {
            return Ok(Cached::ready(Vec::new()));
        }

        info!("QuotesService::get_quotes - {} symbols", symbols.len());

        let key = Self::quotes_key(&symbols);
        let source = state.source.clone();
        state
            .cache
            .get_or_fetch(key, policy::QUOTES, move || async move {
                source.get_stocks(&symbols).await
            })
            .await
    }

    /// Get a single quote
    pub async fn get_quote(state: &AppState, symbol: &str) -> Result<Cached<StockData>> {
        let symbol = normalize_symbol(symbol);
        if symbol.is_empty() {
            return Err(AppError::NotFound("empty symbol".to_string()));
        }

        info!("QuotesService::get_quote - {}", symbol);

        let key = Self::quote_key(&symbol);
        let source = state.source.clone();
        state
            .cache
            .get_or_fetch(key, policy::QUOTES, move || async move {
                source.get_stock(&symbol).await
            })
            .await
    }

    /// Quotes for the largest companies by market cap
    pub async fn get_top_market_cap(
        state: &AppState,
        limit: Option<usize>,
    ) -> Result<Cached<Vec<StockData>>> {
        let limit = limit
            .unwrap_or(DEFAULT_TOP_LIMIT)
            .min(TOP_MARKET_CAP_SYMBOLS.len());
        let symbols: Vec<String> = TOP_MARKET_CAP_SYMBOLS[..limit]
            .iter()
            .map(|s| s.to_string())
            .collect();
        Self::get_quotes(state, &symbols).await
    }

    /// Quotes for the most volatile large-caps
    pub async fn get_daily_movers(state: &AppState) -> Result<Cached<Vec<StockData>>> {
        let symbols: Vec<String> = DAILY_MOVER_SYMBOLS.iter().map(|s| s.to_string()).collect();
        Self::get_quotes(state, &symbols).await
    }

    /// Quotes for a sector screen; an unknown sector falls back to the
    /// default universe
    pub async fn get_stocks_by_sector(
        state: &AppState,
        sector: &str,
    ) -> Result<Cached<Vec<StockData>>> {
        let symbols: Vec<String> = sector_symbols(sector).iter().map(|s| s.to_string()).collect();
        Self::get_quotes(state, &symbols).await
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
    async fn test_empty_symbol_list_is_ready_and_uncached() {
        let (_dir, state) = test_state();
        let cached = QuotesService::get_quotes(&state, &[]).await.unwrap();
        assert_eq!(cached.state, QueryState::Ready);
        assert_eq!(cached.value.unwrap().len(), 0);
        assert!(state.cache.is_empty());
    }

    #[tokio::test]
    async fn test_quotes_are_cached_per_symbol_set() {
        let (_dir, state) = test_state();
        let symbols = vec!["aapl".to_string(), "msft".to_string()];

        let first = QuotesService::get_quotes(&state, &symbols).await.unwrap();
        assert_eq!(first.value.as_ref().unwrap().len(), 2);
        assert_eq!(state.cache.len(), 1);

        // Same set, different casing: same key, served from cache
        let again = QuotesService::get_quotes(&state, &["AAPL".to_string(), "MSFT".to_string()])
            .await
            .unwrap();
        assert_eq!(again.value.unwrap().len(), 2);
        assert_eq!(state.cache.len(), 1);
    }

    #[tokio::test]
    async fn test_get_quote_unknown_symbol() {
        let (_dir, state) = test_state();
        let err = QuotesService::get_quote(&state, "ZZZZ").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_sector_screen_falls_back_for_unknown_sector() {
        let (_dir, state) = test_state();
        let cached = QuotesService::get_stocks_by_sector(&state, "nonsense")
            .await
            .unwrap();
        let quotes = cached.value.unwrap();
        assert!(quotes.iter().any(|q| q.symbol == "NVDA"));
    }

    #[tokio::test]
    async fn test_top_market_cap_respects_limit() {
        let (_dir, state) = test_state();
        let cached = QuotesService::get_top_market_cap(&state, Some(3))
            .await
            .unwrap();
        assert_eq!(cached.value.unwrap().len(), 3);
    }
}
