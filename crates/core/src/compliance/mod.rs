//! Compliance: whether qualifying payments cover the obligation.

pub mod evaluator;

#[cfg(test)]
mod props;

pub use evaluator::{ComplianceStatus, evaluate};
