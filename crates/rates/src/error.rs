//! Rate store error types.

use nisab_core::currency::CurrencyError;
use thiserror::Error;

/// Errors from fetching a fresh rate table. None of them are fatal: the
/// current table stays in place.
#[derive(Debug, Error)]
pub enum RateFetchError {
    /// The request could not be sent or the connection failed.
    #[error("Network error: {0}")]
    Network(String),

    /// The provider did not answer within the configured timeout.
    #[error("Request timed out after {0}s")]
    Timeout(u64),

    /// The provider answered with a non-success status.
    #[error("Provider returned HTTP {0}")]
    HttpStatus(u16),

    /// The body was not the expected JSON shape or held unusable values.
    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    /// The rates parsed but do not form a valid table.
    #[error("Invalid rate table: {0}")]
    InvalidTable(#[from] CurrencyError),
}

/// Errors from loading or saving a snapshot.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Filesystem error.
    #[error("Snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot could not be encoded or decoded.
    #[error("Snapshot serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
