//! Dividends Service
//!
//! Dividend payer panel; slow-moving, refreshed hourly.

use crate::cache::{policy, Cached, QueryKey};
use crate::datasource::types::DividendStock;
use crate::error::Result;
use crate::state::AppState;
use tracing::info;

/// Default number of dividend rows in the panel
pub const DEFAULT_DIVIDENDS_LIMIT: usize = 6;

/// Dividends service for business logic
pub struct DividendsService;

impl DividendsService {
    pub(crate) fn dividends_key(limit: usize) -> QueryKey {
        QueryKey::new("market.dividends", &limit)
    }

    /// Get dividend payers
    pub async fn get_dividends(
        state: &AppState,
        limit: usize,
    ) -> Result<Cached<Vec<DividendStock>>> {
        info!("DividendsService::get_dividends - limit={}", limit);

        let source = state.source.clone();
        state
            .cache
            .get_or_fetch(
                Self::dividends_key(limit),
                policy::DIVIDENDS,
                move || async move { source.get_dividends(limit).await },
            )
            .await
    }
}
