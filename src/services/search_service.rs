//! Search Service
//!
//! Ticker search by symbol or company name. Interactive (the UI debounces
//! keystrokes), so results are fetched directly rather than cached.

use crate::datasource::types::SearchResult;
use crate::error::Result;
use crate::state::AppState;
use tracing::info;

/// Search service for business logic
pub struct SearchService;

impl SearchService {
    /// Search tickers; an empty query short-circuits to an empty result
    pub async fn search(state: &AppState, query: &str) -> Result<Vec<SearchResult>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        info!("SearchService::search - q={}", query);
        state.source.search(query).await
    }
}
