//! Ratings Service
//!
//! Analyst consensus ratings for the dashboard panel.

use crate::cache::{policy, Cached, QueryKey};
use crate::datasource::types::AnalystRating;
use crate::error::Result;
use crate::state::AppState;
use tracing::info;

/// Default number of rating rows in the panel
pub const DEFAULT_RATINGS_LIMIT: usize = 6;

/// Ratings service for business logic
pub struct RatingsService;

impl RatingsService {
    pub(crate) fn ratings_key(limit: usize) -> QueryKey {
        QueryKey::new("market.ratings", &limit)
    }

    /// Get analyst ratings
    pub async fn get_ratings(
        state: &AppState,
        limit: usize,
    ) -> Result<Cached<Vec<AnalystRating>>> {
        info!("RatingsService::get_ratings - limit={}", limit);

        let source = state.source.clone();
        state
            .cache
            .get_or_fetch(
                Self::ratings_key(limit),
                policy::RATINGS,
                move || async move { source.get_ratings(limit).await },
            )
            .await
    }
}
