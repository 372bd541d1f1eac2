//! Asset and donation records, and their aggregation into a single currency.

pub mod aggregate;
pub mod error;
pub mod records;

#[cfg(test)]
mod props;

pub use aggregate::{
    Valued, qualifying_payments, total, total_assets, total_donations, total_qualifying_payments,
};
pub use error::RecordError;
pub use records::{
    AssetCategory, AssetRecord, DonationCategory, DonationRecord, NewAsset, NewDonation,
};
