//! News Service
//!
//! Market news list and the single featured story.

use crate::cache::{policy, Cached, QueryKey};
use crate::datasource::types::{FeaturedNews, NewsItem};
use crate::error::Result;
use crate::state::AppState;
use tracing::info;

/// Default number of news items in the panel
pub const DEFAULT_NEWS_LIMIT: usize = 6;

/// News service for business logic
pub struct NewsService;

impl NewsService {
    pub(crate) fn news_key(limit: usize) -> QueryKey {
        QueryKey::new("market.news", &limit)
    }

    pub(crate) fn featured_key() -> QueryKey {
        QueryKey::new("market.news.featured", &())
    }

    /// Get market news
    pub async fn get_news(state: &AppState, limit: usize) -> Result<Cached<Vec<NewsItem>>> {
        info!("NewsService::get_news - limit={}", limit);

        let source = state.source.clone();
        state
            .cache
            .get_or_fetch(Self::news_key(limit), policy::NEWS, move || async move {
                source.get_news(limit).await
            })
            .await
    }

    /// Get the featured story
    pub async fn get_featured(state: &AppState) -> Result<Cached<FeaturedNews>> {
        info!("NewsService::get_featured");

        let source = state.source.clone();
        state
            .cache
            .get_or_fetch(
                Self::featured_key(),
                policy::FEATURED_NEWS,
                move || async move { source.get_featured_news().await },
            )
            .await
    }
}
