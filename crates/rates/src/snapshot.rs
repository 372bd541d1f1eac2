//! Rate snapshot: the unit that is swapped and persisted.

use chrono::{DateTime, TimeDelta, Utc};
use nisab_core::currency::RateTable;
use serde::{Deserialize, Serialize};

/// A rate table together with the time it was fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateSnapshot {
    /// Units of each currency per 1 USD.
    pub rates: RateTable,
    /// When the table was fetched. `None` means the built-in table is in use.
    pub last_updated: Option<DateTime<Utc>>,
}

impl RateSnapshot {
    /// Snapshot of a freshly fetched table.
    #[must_use]
    pub const fn fetched(rates: RateTable, at: DateTime<Utc>) -> Self {
        Self {
            rates,
            last_updated: Some(at),
        }
    }

    /// The built-in table, never refreshed.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            rates: RateTable::fallback(),
            last_updated: None,
        }
    }

    /// Hours between the fetch and `now`, `f64::INFINITY` if never fetched.
    #[allow(clippy::float_arithmetic, clippy::cast_precision_loss)]
    #[must_use]
    pub fn hours_since_update(&self, now: DateTime<Utc>) -> f64 {
        match self.last_updated {
            Some(at) => (now - at).num_milliseconds() as f64 / 3_600_000.0,
            None => f64::INFINITY,
        }
    }

    /// True when the table is older than `stale_after` or was never fetched.
    #[must_use]
    pub fn is_stale(&self, now: DateTime<Utc>, stale_after: TimeDelta) -> bool {
        match self.last_updated {
            Some(at) => now - at > stale_after,
            None => true,
        }
    }
}

impl Default for RateSnapshot {
    fn default() -> Self {
        Self::fallback()
    }
}
