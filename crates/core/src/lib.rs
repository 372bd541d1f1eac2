//! Core valuation logic for Nisab.
//!
//! This crate contains pure calculation logic with ZERO web or storage dependencies.
//! Every function takes the rate table snapshot it needs by reference.
//!
//! # Modules
//!
//! - `currency` - Currency reference data, rate tables and conversion
//! - `valuation` - Asset and donation records, aggregation into one currency
//! - `nisab` - Gold and silver thresholds
//! - `obligation` - Zakat due and calculation snapshots
//! - `compliance` - Qualifying payments against the amount due
//! - `reports` - Donation breakdowns

pub mod compliance;
pub mod context;
pub mod currency;
pub mod nisab;
pub mod obligation;
pub mod reports;
pub mod valuation;

pub use context::ValuationContext;
