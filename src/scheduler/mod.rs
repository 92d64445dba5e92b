//! Scheduler module
//!
//! Per-key background refresh tasks on fixed intervals, with channel-based
//! cancellation. Each dashboard panel gets its own independent timer; no
//! ordering is guaranteed across keys.

mod refresh;

pub use refresh::RefreshScheduler;

use crate::cache::policy;
use crate::services::{
    DividendsService, EarningsService, MarketService, NewsService, RatingsService,
    DEFAULT_DIVIDENDS_LIMIT, DEFAULT_EARNINGS_LIMIT, DEFAULT_NEWS_LIMIT, DEFAULT_RATINGS_LIMIT,
};
use crate::state::AppState;
use std::sync::Arc;

/// Subscribe the standard dashboard panels to background refresh
pub fn subscribe_dashboard(scheduler: &RefreshScheduler, state: &Arc<AppState>) {
    let source = state.source.clone();
    scheduler.subscribe(MarketService::snapshot_key(), policy::SNAPSHOT, move || {
        let source = source.clone();
        async move { source.get_market_snapshot().await }
    });

    let source = state.source.clone();
    scheduler.subscribe(MarketService::status_key(), policy::STATUS, move || {
        let source = source.clone();
        async move { source.get_market_status().await }
    });

    let source = state.source.clone();
    scheduler.subscribe(MarketService::sectors_key(), policy::SECTORS, move || {
        let source = source.clone();
        async move { source.get_sectors().await }
    });

    let source = state.source.clone();
    scheduler.subscribe(
        MarketService::week_extremes_key(),
        policy::WEEK_EXTREMES,
        move || {
            let source = source.clone();
            async move { source.get_week_highs_lows().await }
        },
    );

    let source = state.source.clone();
    scheduler.subscribe(
        NewsService::news_key(DEFAULT_NEWS_LIMIT),
        policy::NEWS,
        move || {
            let source = source.clone();
            async move { source.get_news(DEFAULT_NEWS_LIMIT).await }
        },
    );

    let source = state.source.clone();
    scheduler.subscribe(
        NewsService::featured_key(),
        policy::FEATURED_NEWS,
        move || {
            let source = source.clone();
            async move { source.get_featured_news().await }
        },
    );

    let source = state.source.clone();
    scheduler.subscribe(
        EarningsService::earnings_key(DEFAULT_EARNINGS_LIMIT),
        policy::EARNINGS,
        move || {
            let source = source.clone();
            async move { source.get_earnings(DEFAULT_EARNINGS_LIMIT).await }
        },
    );

    let source = state.source.clone();
    scheduler.subscribe(
        RatingsService::ratings_key(DEFAULT_RATINGS_LIMIT),
        policy::RATINGS,
        move || {
            let source = source.clone();
            async move { source.get_ratings(DEFAULT_RATINGS_LIMIT).await }
        },
    );

    let source = state.source.clone();
    scheduler.subscribe(
        DividendsService::dividends_key(DEFAULT_DIVIDENDS_LIMIT),
        policy::DIVIDENDS,
        move || {
            let source = source.clone();
            async move { source.get_dividends(DEFAULT_DIVIDENDS_LIMIT).await }
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use std::time::Duration;

    #[tokio::test]
    async fn test_dashboard_subscription_covers_every_panel() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            api_base_url: None,
            data_dir: dir.path().to_path_buf(),
            http_timeout: Duration::from_secs(5),
        };
        let state = Arc::new(AppState::new(config).unwrap());
        let scheduler = RefreshScheduler::new(state.cache.clone());

        subscribe_dashboard(&scheduler, &state);
        assert_eq!(scheduler.len(), 9);

        // Scheduler keys must line up with the keys services read through
        assert!(scheduler.is_subscribed(&MarketService::snapshot_key()));
        assert!(scheduler.is_subscribed(&MarketService::status_key()));
        assert!(scheduler.is_subscribed(&NewsService::news_key(DEFAULT_NEWS_LIMIT)));
        assert!(scheduler.is_subscribed(&EarningsService::earnings_key(DEFAULT_EARNINGS_LIMIT)));

        scheduler.shutdown();
        assert!(scheduler.is_empty());
    }
}
