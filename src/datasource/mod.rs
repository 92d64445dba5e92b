//! Data source adapters module
//!
//! One async operation per dashboard data category, behind a single trait.
//! The concrete source is selected once at startup: remote HTTP when a base
//! URL is configured, the built-in mock otherwise. Call sites never branch
//! on the backend kind.

pub mod types;
pub mod mock;
pub mod remote;

use crate::config::AppConfig;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use types::*;

/// Symbols backing the "top market cap" panel
pub const TOP_MARKET_CAP_SYMBOLS: &[&str] = &[
    "AAPL", "MSFT", "GOOGL", "AMZN", "NVDA", "META", "BRK-B", "UNH", "JNJ", "XOM",
];

/// Symbols backing the "daily movers" panel
pub const DAILY_MOVER_SYMBOLS: &[&str] = &["NVDA", "TSLA", "META", "AMD", "NFLX"];

/// Default universe used when a sector filter is unknown
const SECTOR_ALL: &[&str] = &[
    "NVDA", "AAPL", "MSFT", "GOOGL", "META", "AMZN", "TSLA", "AMD", "JPM", "JNJ",
];

/// Sector filtering is resolved client-side against curated universes
pub fn sector_symbols(sector: &str) -> &'static [&'static str] {
    match sector {
        "tech" => &[
            "NVDA", "AAPL", "MSFT", "GOOGL", "META", "AMD", "NFLX", "ADBE", "CRM", "INTC",
        ],
        "finance" => &[
            "JPM", "V", "MA", "BRK-B", "BAC", "GS", "MS", "AXP", "BLK", "C",
        ],
        "energy" => &[
            "XOM", "CVX", "COP", "SLB", "EOG", "PXD", "MPC", "VLO", "PSX", "OXY",
        ],
        "healthcare" => &[
            "JNJ", "UNH", "PFE", "ABBV", "MRK", "LLY", "TMO", "ABT", "DHR", "BMY",
        ],
        _ => SECTOR_ALL,
    }
}

/// Normalize a ticker symbol for lookups and requests
pub fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_ascii_uppercase()
}

/// Market data source that all backend implementations must implement
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Source ID (e.g., "remote", "mock")
    fn id(&self) -> &'static str;

    /// Source display name
    fn name(&self) -> &'static str;

    /// Search tickers by symbol or company name, case-insensitive, max 5 hits
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>>;

    /// Fetch quotes for multiple symbols; empty input yields an empty result
    async fn get_stocks(&self, symbols: &[String]) -> Result<Vec<StockData>>;

    /// Fetch a single quote
    async fn get_stock(&self, symbol: &str) -> Result<StockData>;

    /// Fetch indices and top movers
    async fn get_market_snapshot(&self) -> Result<MarketSnapshot>;

    /// Fetch exchange open/closed state
    async fn get_market_status(&self) -> Result<MarketStatus>;

    /// Fetch sector performance
    async fn get_sectors(&self) -> Result<Vec<Sector>>;

    /// Fetch market news
    async fn get_news(&self, limit: usize) -> Result<Vec<NewsItem>>;

    /// Fetch the single featured story
    async fn get_featured_news(&self) -> Result<FeaturedNews>;

    /// Fetch upcoming earnings events
    async fn get_earnings(&self, limit: usize) -> Result<Vec<EarningEvent>>;

    /// Fetch analyst ratings
    async fn get_ratings(&self, limit: usize) -> Result<Vec<AnalystRating>>;

    /// Fetch dividend payers
    async fn get_dividends(&self, limit: usize) -> Result<Vec<DividendStock>>;

    /// Fetch 52-week highs and lows
    async fn get_week_highs_lows(&self) -> Result<WeekExtremes>;
}

/// Select the data source for this process
pub fn create_data_source(config: &AppConfig) -> Result<Arc<dyn MarketDataSource>> {
    match &config.api_base_url {
        Some(base_url) => {
            tracing::info!("Using remote data source at {}", base_url);
            Ok(Arc::new(remote::RemoteDataSource::new(
                base_url.clone(),
                config.http_timeout,
            )?))
        }
        None => {
            tracing::info!("No API base URL configured, using mock data source");
            Ok(Arc::new(mock::MockDataSource::new()))
        }
    }
}
