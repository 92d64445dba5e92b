//! Market Service
//!
//! Market-wide panels: snapshot (indices + top movers), exchange status,
//! sector performance and 52-week extremes.

use crate::cache::{policy, Cached, QueryKey};
use crate::datasource::types::{MarketSnapshot, MarketStatus, Sector, WeekExtremes};
use crate::error::Result;
use crate::state::AppState;
use tracing::info;

/// Market service for business logic
pub struct MarketService;

impl MarketService {
    pub(crate) fn snapshot_key() -> QueryKey {
        QueryKey::new("market.snapshot", &())
    }

    pub(crate) fn status_key() -> QueryKey {
        QueryKey::new("market.status", &())
    }

    pub(crate) fn sectors_key() -> QueryKey {
        QueryKey::new("market.sectors", &())
    }

    pub(crate) fn week_extremes_key() -> QueryKey {
        QueryKey::new("market.week_extremes", &())
    }

    /// Get the market snapshot (indices and top movers)
    pub async fn get_snapshot(state: &AppState) -> Result<Cached<MarketSnapshot>> {
        info!("MarketService::get_snapshot");

        let source = state.source.clone();
        state
            .cache
            .get_or_fetch(Self::snapshot_key(), policy::SNAPSHOT, move || async move {
                source.get_market_snapshot().await
            })
            .await
    }

    /// Get exchange open/closed status
    pub async fn get_status(state: &AppState) -> Result<Cached<MarketStatus>> {
        info!("MarketService::get_status");

        let source = state.source.clone();
        state
            .cache
            .get_or_fetch(Self::status_key(), policy::STATUS, move || async move {
                source.get_market_status().await
            })
            .await
    }

    /// Get sector performance
    pub async fn get_sectors(state: &AppState) -> Result<Cached<Vec<Sector>>> {
        info!("MarketService::get_sectors");

        let source = state.source.clone();
        state
            .cache
            .get_or_fetch(Self::sectors_key(), policy::SECTORS, move || async move {
                source.get_sectors().await
            })
            .await
    }

    /// Get 52-week highs and lows
    pub async fn get_week_highs_lows(state: &AppState) -> Result<Cached<WeekExtremes>> {
        info!("MarketService::get_week_highs_lows");

        let source = state.source.clone();
        state
            .cache
            .get_or_fetch(
                Self::week_extremes_key(),
                policy::WEEK_EXTREMES,
                move || async move { source.get_week_highs_lows().await },
            )
            .await
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
    async fn test_snapshot_is_cached() {
        let (_dir, state) = test_state();

        let first = MarketService::get_snapshot(&state).await.unwrap();
        assert_eq!(first.state, QueryState::Ready);
        assert_eq!(first.value.unwrap().indices.len(), 3);

        assert_eq!(
            state.cache.state(&MarketService::snapshot_key(), policy::SNAPSHOT),
            QueryState::Ready
        );
    }

    #[tokio::test]
    async fn test_status_reports_nyse() {
        let (_dir, state) = test_state();
        let status = MarketService::get_status(&state).await.unwrap();
        assert_eq!(status.value.unwrap().exchange, "NYSE");
    }
}
