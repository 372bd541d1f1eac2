//! Exchange rate store.
//!
//! Readers take an `Arc<RateSnapshot>` and keep using it for the whole
//! calculation, so a concurrent refresh is never observed half-applied.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, TimeDelta, Utc};
use nisab_shared::types::CurrencyCode;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::error::RateFetchError;
use crate::provider::RateProvider;
use crate::repository::RateSnapshotRepository;
use crate::snapshot::RateSnapshot;

/// Result of a refresh that reached the provider successfully.
#[derive(Debug, Clone)]
pub enum RefreshOutcome {
    /// The fetched table is now current.
    Applied {
        /// The snapshot that was installed.
        snapshot: Arc<RateSnapshot>,
        /// Whether the repository accepted it.
        persisted: bool,
    },
    /// A refresh started later already installed its table; this result was dropped.
    Superseded,
}

#[derive(Debug)]
struct State {
    snapshot: Arc<RateSnapshot>,
    applied_ticket: u64,
}

/// Current exchange rates plus the machinery to refresh and persist them.
pub struct ExchangeRateStore {
    provider: Arc<dyn RateProvider>,
    repository: Arc<dyn RateSnapshotRepository>,
    stale_after: TimeDelta,
    state: RwLock<State>,
    tickets: AtomicU64,
    persisted_ticket: Mutex<u64>,
}

impl ExchangeRateStore {
    /// Creates a store holding the built-in table.
    #[must_use]
    pub fn new(
        provider: Arc<dyn RateProvider>,
        repository: Arc<dyn RateSnapshotRepository>,
        stale_after_hours: u64,
    ) -> Self {
        Self::with_snapshot(provider, repository, stale_after_hours, RateSnapshot::fallback())
    }

    /// Creates a store holding `snapshot`.
    #[must_use]
    pub fn with_snapshot(
        provider: Arc<dyn RateProvider>,
        repository: Arc<dyn RateSnapshotRepository>,
        stale_after_hours: u64,
        snapshot: RateSnapshot,
    ) -> Self {
        let hours = i64::try_from(stale_after_hours).unwrap_or(i64::MAX);
        Self {
            provider,
            repository,
            stale_after: TimeDelta::try_hours(hours).unwrap_or(TimeDelta::MAX),
            state: RwLock::new(State {
                snapshot: Arc::new(snapshot),
                applied_ticket: 0,
            }),
            tickets: AtomicU64::new(0),
            persisted_ticket: Mutex::new(0),
        }
    }

    /// Creates a store from the persisted snapshot, or the built-in table if
    /// there is none or it cannot be read.
    pub async fn load(
        provider: Arc<dyn RateProvider>,
        repository: Arc<dyn RateSnapshotRepository>,
        stale_after_hours: u64,
    ) -> Self {
        let snapshot = match repository.load().await {
            Ok(Some(snapshot)) => {
                info!(
                    currencies = snapshot.rates.len(),
                    last_updated = ?snapshot.last_updated,
                    "Restored exchange rate snapshot"
                );
                snapshot
            }
            Ok(None) => {
                info!("No saved exchange rates, using built-in table");
                RateSnapshot::fallback()
            }
            Err(e) => {
                warn!(error = %e, "Failed to read saved exchange rates, using built-in table");
                RateSnapshot::fallback()
            }
        };

        Self::with_snapshot(provider, repository, stale_after_hours, snapshot)
    }

    /// The current snapshot.
    pub fn current(&self) -> Arc<RateSnapshot> {
        Arc::clone(&self.read_state().snapshot)
    }

    /// Fetches a fresh table and installs it.
    ///
    /// On failure the current table and timestamp are left exactly as they were.
    /// A failure to persist the new snapshot is logged and reported through
    /// `RefreshOutcome::Applied::persisted`, not as an error.
    ///
    /// # Errors
    ///
    /// Returns the provider's `RateFetchError`.
    pub async fn refresh(&self) -> Result<RefreshOutcome, RateFetchError> {
        let ticket = self.tickets.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(ticket, "Refreshing exchange rates");

        let rates = match self.provider.fetch_latest(&CurrencyCode::usd()).await {
            Ok(rates) => rates,
            Err(e) => {
                warn!(error = %e, ticket, "Exchange rate refresh failed, keeping current table");
                return Err(e);
            }
        };

        let snapshot = Arc::new(RateSnapshot::fetched(rates, Utc::now()));
        {
            let mut state = self.write_state();
            if ticket < state.applied_ticket {
                info!(
                    ticket,
                    applied = state.applied_ticket,
                    "Discarding superseded exchange rate refresh"
                );
                return Ok(RefreshOutcome::Superseded);
            }
            state.snapshot = Arc::clone(&snapshot);
            state.applied_ticket = ticket;
        }
        info!(currencies = snapshot.rates.len(), "Exchange rates updated");

        let persisted = self.persist(ticket, &snapshot).await;
        Ok(RefreshOutcome::Applied {
            snapshot,
            persisted,
        })
    }

    async fn persist(&self, ticket: u64, snapshot: &RateSnapshot) -> bool {
        let mut persisted_ticket = self.persisted_ticket.lock().await;
        if ticket < *persisted_ticket {
            // A newer snapshot is already on disk.
            return true;
        }

        match self.repository.save(snapshot).await {
            Ok(()) => {
                *persisted_ticket = ticket;
                true
            }
            Err(e) => {
                error!(error = %e, "Failed to persist exchange rate snapshot");
                false
            }
        }
    }

    /// Hours since the last successful refresh, `f64::INFINITY` if never refreshed.
    pub fn hours_since_update(&self, now: DateTime<Utc>) -> f64 {
        self.current().hours_since_update(now)
    }

    /// True when the table is older than the configured threshold or was never refreshed.
    pub fn is_stale(&self, now: DateTime<Utc>) -> bool {
        self.current().is_stale(now, self.stale_after)
    }

    /// Age after which a snapshot counts as stale.
    pub const fn stale_after(&self) -> TimeDelta {
        self.stale_after
    }

    fn read_state(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for ExchangeRateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExchangeRateStore")
            .field("stale_after", &self.stale_after)
            .field("snapshot", &self.current())
            .finish_non_exhaustive()
    }
}
