//! Earnings Service
//!
//! Upcoming earnings calendar; slow-moving, refreshed hourly.

use crate::cache::{policy, Cached, QueryKey};
use crate::datasource::types::EarningEvent;
use crate::error::Result;
use crate::state::AppState;
use tracing::info;

/// Default number of calendar rows in the panel
pub const DEFAULT_EARNINGS_LIMIT: usize = 8;

/// Earnings service for business logic
pub struct EarningsService;

impl EarningsService {
    pub(crate) fn earnings_key(limit: usize) -> QueryKey {
        QueryKey::new("market.earnings", &limit)
    }

    /// Get upcoming earnings events
    pub async fn get_earnings(
        state: &AppState,
        limit: usize,
    ) -> Result<Cached<Vec<EarningEvent>>> {
        info!("EarningsService::get_earnings - limit={}", limit);

        let source = state.source.clone();
        state
            .cache
            .get_or_fetch(
                Self::earnings_key(limit),
                policy::EARNINGS,
                move || async move { source.get_earnings(limit).await },
            )
            .await
    }
}
