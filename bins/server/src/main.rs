//! Nisab API Server
//!
//! Main entry point for the Nisab valuation service.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use chrono::Utc;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nisab_api::{AppState, create_router};
use nisab_rates::{
    ExchangeRateStore, HttpRateProvider, InMemoryRateRepository, JsonFileRateRepository,
    RateSnapshotRepository,
};
use nisab_shared::AppConfig;
use nisab_shared::config::RatesConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nisab=debug,nisab_api=debug,nisab_rates=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Restore or initialize the exchange rate store
    let store = Arc::new(build_store(&config.rates).await);
    info!(
        provider = %config.rates.provider_url,
        stale_after_hours = config.rates.stale_after_hours,
        "Exchange rate store ready"
    );

    if store.is_stale(Utc::now())
        && let Err(e) = store.refresh().await
    {
        warn!(error = %e, "Initial exchange rate refresh failed, serving saved rates");
    }
    spawn_refresh_task(Arc::clone(&store), config.rates.refresh_check_secs);

    // Create application state
    let state = AppState::new(store, config.valuation.clone());

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!(
        reporting_currency = %config.valuation.reporting_currency,
        "Server listening on {}",
        addr
    );

    axum::serve(listener, app).await?;

    Ok(())
}

async fn build_store(config: &RatesConfig) -> ExchangeRateStore {
    let repository: Arc<dyn RateSnapshotRepository> = match &config.snapshot_path {
        Some(path) => {
            info!(path = %path, "Persisting exchange rates to file");
            Arc::new(JsonFileRateRepository::new(path))
        }
        None => Arc::new(InMemoryRateRepository::new()),
    };
    let provider = Arc::new(HttpRateProvider::from_config(config));

    ExchangeRateStore::load(provider, repository, config.stale_after_hours).await
}

/// Checks staleness on a fixed interval and refreshes when due.
fn spawn_refresh_task(store: Arc<ExchangeRateStore>, check_secs: u64) {
    let period = Duration::from_secs(check_secs.max(1));
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        // The first tick completes immediately; startup already handled it.
        interval.tick().await;
        loop {
            interval.tick().await;
            if !store.is_stale(Utc::now()) {
                debug!("Exchange rates fresh, skipping refresh");
                continue;
            }
            // Failures are logged by the store; the current table stays in use.
            let _ = store.refresh().await;
        }
    });
}
