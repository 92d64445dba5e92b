//! MarketDeck - Market Monitoring Dashboard Engine
//!
//! Headless data engine behind a market-monitoring dashboard: a switchable
//! mock/remote market-data source, a query cache with deduplicated fetches
//! and background refresh, and persisted watchlist/preference stores.

pub mod cache;
pub mod config;
pub mod datasource;
pub mod db;
pub mod error;
pub mod scheduler;
pub mod services;
pub mod state;
pub mod store;

use config::AppConfig;
use error::Result;
use scheduler::RefreshScheduler;
use state::AppState;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize and run the engine until Ctrl-C
pub async fn run() -> Result<()> {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "marketdeck=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting MarketDeck...");

    let config = AppConfig::from_env()?;
    let state = Arc::new(AppState::new(config)?);
    tracing::info!("Data source: {}", state.source.name());

    // Background refresh for the standard dashboard panels
    let refresh_scheduler = RefreshScheduler::new(state.cache.clone());
    scheduler::subscribe_dashboard(&refresh_scheduler, &state);
    tracing::info!(
        "Refresh scheduler started ({} panels)",
        refresh_scheduler.len()
    );

    tokio::signal::ctrl_c().await?;

    tracing::info!("Shutting down");
    refresh_scheduler.shutdown();
    Ok(())
}
