//! Remote HTTP data source adapter
//!
//! Thin client over the dashboard API. Every response is JSON; any non-2xx
//! status surfaces as `AppError::Api` and the caller decides what to retain.

use crate::datasource::types::*;
use crate::datasource::{normalize_symbol, MarketDataSource};
use crate::error::{AppError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// HTTP-backed market data source
pub struct RemoteDataSource {
    client: Client,
    base_url: Url,
}

impl RemoteDataSource {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    /// Resolve an API path against the configured base URL
    fn endpoint(&self, path: &str) -> Result<Url> {
        let joined = format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path);
        Ok(Url::parse(&joined)?)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = self.endpoint(path)?;
        let response = self.client.get(url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Api {
                status: status.as_u16(),
                endpoint: path.to_string(),
            });
        }

        Ok(response.json().await?)
    }
}

/// Comma-separated symbol list, normalized to uppercase
fn symbols_param(symbols: &[String]) -> String {
    symbols
        .iter()
        .map(|s| normalize_symbol(s))
        .collect::<Vec<_>>()
        .join(",")
}

#[async_trait]
impl MarketDataSource for RemoteDataSource {
    fn id(&self) -> &'static str {
        "remote"
    }

    fn name(&self) -> &'static str {
        "Remote API"
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        self.get_json("/api/search", &[("q", query.to_string())])
            .await
    }

    async fn get_stocks(&self, symbols: &[String]) -> Result<Vec<StockData>> {
        if symbols.is_empty() {
            return Ok(Vec::new());
        }
        self.get_json("/api/stocks", &[("symbols", symbols_param(symbols))])
            .await
    }

    async fn get_stock(&self, symbol: &str) -> Result<StockData> {
        let symbol = normalize_symbol(symbol);
        let path = format!("/api/stocks/{}", symbol);
        match self.get_json(&path, &[]).await {
            Err(AppError::Api { status: 404, .. }) => Err(AppError::NotFound(symbol)),
            other => other,
        }
    }

    async fn get_market_snapshot(&self) -> Result<MarketSnapshot> {
        self.get_json("/api/market/snapshot", &[]).await
    }

    async fn get_market_status(&self) -> Result<MarketStatus> {
        self.get_json("/api/market/status", &[]).await
    }

    async fn get_sectors(&self) -> Result<Vec<Sector>> {
        self.get_json("/api/market/sectors", &[]).await
    }

    async fn get_news(&self, limit: usize) -> Result<Vec<NewsItem>> {
        self.get_json("/api/market/news", &[("limit", limit.to_string())])
            .await
    }

    async fn get_featured_news(&self) -> Result<FeaturedNews> {
        self.get_json("/api/market/news/featured", &[]).await
    }

    async fn get_earnings(&self, limit: usize) -> Result<Vec<EarningEvent>> {
        self.get_json("/api/market/earnings", &[("limit", limit.to_string())])
            .await
    }

    async fn get_ratings(&self, limit: usize) -> Result<Vec<AnalystRating>> {
        self.get_json("/api/market/ratings", &[("limit", limit.to_string())])
            .await
    }

    async fn get_dividends(&self, limit: usize) -> Result<Vec<DividendStock>> {
        self.get_json("/api/market/dividends", &[("limit", limit.to_string())])
            .await
    }

    async fn get_week_highs_lows(&self) -> Result<WeekExtremes> {
        self.get_json("/api/market/week-highs-lows", &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(base: &str) -> RemoteDataSource {
        RemoteDataSource::new(Url::parse(base).unwrap(), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_endpoint_join_with_and_without_trailing_slash() {
        let a = source("https://api.example.com");
        let b = source("https://api.example.com/");
        assert_eq!(
            a.endpoint("/api/market/snapshot").unwrap().as_str(),
            "https://api.example.com/api/market/snapshot"
        );
        assert_eq!(
            b.endpoint("/api/market/snapshot").unwrap().as_str(),
            "https://api.example.com/api/market/snapshot"
        );
    }

    #[test]
    fn test_symbols_param_is_uppercased_and_joined() {
        let symbols = vec!["aapl".to_string(), " msft ".to_string(), "BRK-B".to_string()];
        assert_eq!(symbols_param(&symbols), "AAPL,MSFT,BRK-B");
    }
}
