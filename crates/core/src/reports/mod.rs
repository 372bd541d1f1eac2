//! Donation reports.
//!
//! - Totals per donation category
//! - Totals per source currency

pub mod service;
pub mod types;


pub use service::ReportService;
pub use types::*;
