//! Synthetic in-memory data source
//!
//! Serves the full dashboard without a configured backend: catalog-backed
//! quotes with a generated sparkline walk, fixture panels, and a market
//! status computed from the exchange clock. Responses are delayed slightly
//! so loading states behave as they would against a network client.

mod catalog;

use crate::datasource::types::*;
use crate::datasource::{normalize_symbol, MarketDataSource};
use crate::error::{AppError, Result};
use async_trait::async_trait;
use catalog::{StockSeed, Trend};
use chrono::{DateTime, Datelike, NaiveTime, Utc};
use chrono_tz::America::New_York;
use chrono_tz::Tz;
use futures_util::future::join_all;
use rand::Rng;
use std::time::Duration;

const SEARCH_LIMIT: usize = 5;

/// Mock market data source implementation
pub struct MockDataSource;

impl MockDataSource {
    pub fn new() -> Self {
        Self
    }

    fn quote_from_seed(seed: &StockSeed) -> StockData {
        StockData {
            symbol: seed.symbol.to_string(),
            name: seed.name.to_string(),
            price: seed.price,
            change: seed.change,
            change_percent: seed.change_percent,
            market_cap: seed.market_cap,
            sparkline: generate_sparkline(seed.price - seed.change, seed.trend),
            currency: "USD".to_string(),
        }
    }
}

impl Default for MockDataSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Simulated network latency
async fn latency(millis: u64) {
    tokio::time::sleep(Duration::from_millis(millis)).await;
}

/// Seven-point price walk with ~2% volatility, biased by the seed trend
fn generate_sparkline(base: f64, trend: Trend) -> Vec<f64> {
    let mut rng = rand::thread_rng();
    let mut points = Vec::with_capacity(7);
    let mut current = base;
    points.push(current);

    for _ in 0..6 {
        let volatility = base * 0.02;
        let delta = (rng.gen::<f64>() - 0.5) * volatility;
        current = match trend {
            Trend::Up => current + delta.abs() * 0.7,
            Trend::Down => current - delta.abs() * 0.7,
            Trend::Flat => current + delta,
        };
        points.push(current.max(0.01));
    }

    points
        .into_iter()
        .map(|p| (p * 100.0).round() / 100.0)
        .collect()
}

/// Compute market status against NYSE hours (9:30 AM - 4:00 PM ET, Mon-Fri)
fn market_status_at(now: DateTime<Tz>) -> MarketStatus {
    let open = NaiveTime::from_hms_opt(9, 30, 0).unwrap();
    let close = NaiveTime::from_hms_opt(16, 0, 0).unwrap();

    let is_weekday = now.weekday().number_from_monday() <= 5;
    let time = now.time();
    let is_open = is_weekday && time >= open && time < close;

    let countdown = if is_open {
        format_countdown(close - time)
    } else if is_weekday && time < open {
        format_countdown(open - time)
    } else {
        // Weekend or after close: no same-day event to count down to
        String::new()
    };

    MarketStatus {
        is_open,
        exchange: "NYSE".to_string(),
        next_event: if is_open { "close" } else { "open" }.to_string(),
        countdown,
        open_time: "9:30 AM ET".to_string(),
        close_time: "4:00 PM ET".to_string(),
    }
}

fn format_countdown(remaining: chrono::Duration) -> String {
    format!("{}h {}m", remaining.num_hours(), remaining.num_minutes() % 60)
}

#[async_trait]
impl MarketDataSource for MockDataSource {
    fn id(&self) -> &'static str {
        "mock"
    }

    fn name(&self) -> &'static str {
        "Mock Data"
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        latency(300).await;

        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return Ok(Vec::new());
        }

        Ok(catalog::SEARCH_UNIVERSE
            .iter()
            .filter(|(symbol, name, _)| {
                symbol.to_lowercase().contains(&q) || name.to_lowercase().contains(&q)
            })
            .take(SEARCH_LIMIT)
            .map(|(symbol, name, exchange)| SearchResult {
                symbol: symbol.to_string(),
                name: name.to_string(),
                exchange: exchange.to_string(),
                kind: "Equity".to_string(),
            })
            .collect())
    }

    async fn get_stocks(&self, symbols: &[String]) -> Result<Vec<StockData>> {
        // Fan out per symbol the way the real backend does; unknown symbols
        // drop out of the result rather than failing the batch
        let fetches = symbols.iter().map(|s| self.get_stock(s));
        let results = join_all(fetches).await;
        Ok(results.into_iter().filter_map(|r| r.ok()).collect())
    }

    async fn get_stock(&self, symbol: &str) -> Result<StockData> {
        latency(500).await;

        let symbol = normalize_symbol(symbol);
        catalog::find_seed(&symbol)
            .map(Self::quote_from_seed)
            .ok_or(AppError::NotFound(symbol))
    }

    async fn get_market_snapshot(&self) -> Result<MarketSnapshot> {
        latency(400).await;

        Ok(MarketSnapshot {
            indices: catalog::indices(),
            top_movers: catalog::top_movers(),
        })
    }

    async fn get_market_status(&self) -> Result<MarketStatus> {
        latency(200).await;

        Ok(market_status_at(Utc::now().with_timezone(&New_York)))
    }

    async fn get_sectors(&self) -> Result<Vec<Sector>> {
        latency(300).await;

        Ok(catalog::sectors())
    }

    async fn get_news(&self, limit: usize) -> Result<Vec<NewsItem>> {
        latency(350).await;

        let mut news = catalog::news();
        news.truncate(limit);
        Ok(news)
    }

    async fn get_featured_news(&self) -> Result<FeaturedNews> {
        latency(200).await;

        Ok(catalog::featured_news())
    }

    async fn get_earnings(&self, limit: usize) -> Result<Vec<EarningEvent>> {
        latency(300).await;

        let mut earnings = catalog::earnings();
        earnings.truncate(limit);
        Ok(earnings)
    }

    async fn get_ratings(&self, limit: usize) -> Result<Vec<AnalystRating>> {
        latency(350).await;

        let mut ratings = catalog::ratings();
        ratings.truncate(limit);
        Ok(ratings)
    }

    async fn get_dividends(&self, limit: usize) -> Result<Vec<DividendStock>> {
        latency(300).await;

        let mut dividends = catalog::dividends();
        dividends.truncate(limit);
        Ok(dividends)
    }

    async fn get_week_highs_lows(&self) -> Result<WeekExtremes> {
        latency(300).await;

        Ok(catalog::week_extremes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Tz> {
        New_York.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let source = MockDataSource::new();
        let lower = source.search("aapl").await.unwrap();
        let upper = source.search("AAPL").await.unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower[0].symbol, "AAPL");
    }

    #[tokio::test]
    async fn test_search_matches_names_and_caps_results() {
        let source = MockDataSource::new();
        let by_name = source.search("apple").await.unwrap();
        assert!(by_name.iter().any(|r| r.symbol == "AAPL"));

        // "a" matches far more than five rows
        let broad = source.search("a").await.unwrap();
        assert_eq!(broad.len(), SEARCH_LIMIT);
    }

    #[tokio::test]
    async fn test_get_stocks_normalizes_and_skips_unknown() {
        let source = MockDataSource::new();
        let quotes = source
            .get_stocks(&["aapl".to_string(), "ZZZZ".to_string()])
            .await
            .unwrap();
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].symbol, "AAPL");
        assert_eq!(quotes[0].sparkline.len(), 7);
    }

    #[tokio::test]
    async fn test_get_stock_unknown_symbol() {
        let source = MockDataSource::new();
        let err = source.get_stock("ZZZZ").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_snapshot_has_indices_and_movers() {
        let source = MockDataSource::new();
        let snapshot = source.get_market_snapshot().await.unwrap();
        assert_eq!(snapshot.indices.len(), 3);
        assert_eq!(snapshot.top_movers.len(), 5);
    }

    #[tokio::test]
    async fn test_news_limit() {
        let source = MockDataSource::new();
        assert_eq!(source.get_news(2).await.unwrap().len(), 2);
        assert_eq!(source.get_news(100).await.unwrap().len(), 6);
    }

    #[test]
    fn test_sparkline_shape() {
        let points = generate_sparkline(100.0, Trend::Up);
        assert_eq!(points.len(), 7);
        assert_eq!(points[0], 100.0);
        for pair in points.windows(2) {
            assert!(pair[1] >= pair[0]);
        }

        let down = generate_sparkline(100.0, Trend::Down);
        for pair in down.windows(2) {
            assert!(pair[1] <= pair[0]);
        }
    }

    #[test]
    fn test_status_open_midday_wednesday() {
        let status = market_status_at(at(2024, 1, 10, 12, 0));
        assert!(status.is_open);
        assert_eq!(status.next_event, "close");
        assert_eq!(status.countdown, "4h 0m");
    }

    #[test]
    fn test_status_premarket_countdown() {
        let status = market_status_at(at(2024, 1, 10, 7, 0));
        assert!(!status.is_open);
        assert_eq!(status.next_event, "open");
        assert_eq!(status.countdown, "2h 30m");
    }

    #[test]
    fn test_status_closed_on_weekend_and_after_hours() {
        let saturday = market_status_at(at(2024, 1, 13, 12, 0));
        assert!(!saturday.is_open);
        assert!(saturday.countdown.is_empty());

        let after_close = market_status_at(at(2024, 1, 10, 16, 0));
        assert!(!after_close.is_open);
        assert!(after_close.countdown.is_empty());
    }
}
