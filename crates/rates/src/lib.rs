//! Exchange rate store for Nisab.
//!
//! Holds the current rate table snapshot, refreshes it from an external
//! provider, reports staleness, and persists the last good snapshot.
//!
//! # Components
//!
//! - `provider` - Fetches a fresh table (`HttpRateProvider` over reqwest)
//! - `repository` - Loads and saves snapshots (in memory or JSON file)
//! - `store` - `ExchangeRateStore`, the atomic swap point readers go through

pub mod error;
pub mod provider;
pub mod repository;
pub mod snapshot;
pub mod store;

pub use error::{RateFetchError, RepositoryError};
pub use provider::{HttpRateProvider, RateProvider};
pub use repository::{InMemoryRateRepository, JsonFileRateRepository, RateSnapshotRepository};
pub use snapshot::RateSnapshot;
pub use store::{ExchangeRateStore, RefreshOutcome};
