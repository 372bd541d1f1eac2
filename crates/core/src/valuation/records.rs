//! Asset and donation record types.

use chrono::NaiveDate;
use nisab_shared::types::{AssetId, DonationId, Money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::RecordError;

/// Asset category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetCategory {
    /// Cash and bank savings.
    Cash,
    /// Gold holdings, recorded by value.
    Gold,
    /// Silver holdings, recorded by value.
    Silver,
    /// Shares and funds.
    Stocks,
    /// Business inventory and receivables.
    Business,
    /// Property held for trade.
    Property,
    /// Anything else.
    Other,
}

/// Donation category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DonationCategory {
    /// Obligatory Zakat payment. Counts toward the obligation.
    Zakat,
    /// Voluntary charity.
    Sadaqah,
    /// Compensation for missed fasts.
    Fidya,
    /// Expiation payment.
    Kaffarah,
    /// Uncategorized giving.
    General,
}

impl DonationCategory {
    /// All categories, in display order.
    pub const ALL: [Self; 5] = [
        Self::Zakat,
        Self::Sadaqah,
        Self::Fidya,
        Self::Kaffarah,
        Self::General,
    ];

    /// Returns true if donations in this category count toward the Zakat obligation.
    #[must_use]
    pub const fn is_qualifying(self) -> bool {
        matches!(self, Self::Zakat)
    }
}

/// A recorded asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRecord {
    /// Record ID.
    pub id: AssetId,
    /// User-facing label.
    pub name: String,
    /// Asset category.
    pub category: AssetCategory,
    /// Value in the currency the user entered it in.
    #[serde(flatten)]
    pub value: Money,
    /// Date the record was created.
    pub date_added: NaiveDate,
    /// Start of the lunar holding year for this asset.
    pub hawl_date: NaiveDate,
    /// Whether Zakat on this asset has been paid.
    #[serde(default)]
    pub is_paid: bool,
}

/// Input for creating an asset record.
#[derive(Debug, Clone, Deserialize)]
pub struct NewAsset {
    /// User-facing label.
    pub name: String,
    /// Asset category.
    pub category: AssetCategory,
    /// Entered value.
    #[serde(flatten)]
    pub value: Money,
    /// Holding-year start; defaults to the creation date.
    pub hawl_date: Option<NaiveDate>,
}

impl AssetRecord {
    /// Validates `input` and builds a new, unpaid asset record dated `today`.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::MissingName` for a blank name and
    /// `RecordError::NonPositiveAmount` for an amount <= 0.
    pub fn create(input: NewAsset, today: NaiveDate) -> Result<Self, RecordError> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(RecordError::MissingName);
        }
        ensure_positive(input.value.amount)?;

        Ok(Self {
            id: AssetId::new(),
            name: name.to_string(),
            category: input.category,
            value: input.value,
            date_added: today,
            hawl_date: input.hawl_date.unwrap_or(today),
            is_paid: false,
        })
    }
}

/// A recorded donation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationRecord {
    /// Record ID.
    pub id: DonationId,
    /// Amount given, in the currency it was given in.
    #[serde(flatten)]
    pub value: Money,
    /// Donation category.
    pub category: DonationCategory,
    /// Receiving organization or person.
    pub recipient: String,
    /// Date of the donation.
    pub date: NaiveDate,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Input for logging a donation.
#[derive(Debug, Clone, Deserialize)]
pub struct NewDonation {
    /// Amount given.
    #[serde(flatten)]
    pub value: Money,
    /// Donation category.
    pub category: DonationCategory,
    /// Receiving organization or person.
    pub recipient: String,
    /// Date of the donation.
    pub date: NaiveDate,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl DonationRecord {
    /// Validates `input` and builds a new donation record.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::MissingRecipient` for a blank recipient and
    /// `RecordError::NonPositiveAmount` for an amount <= 0.
    pub fn create(input: NewDonation) -> Result<Self, RecordError> {
        ensure_positive(input.value.amount)?;
        let recipient = input.recipient.trim();
        if recipient.is_empty() {
            return Err(RecordError::MissingRecipient);
        }

        Ok(Self {
            id: DonationId::new(),
            value: input.value,
            category: input.category,
            recipient: recipient.to_string(),
            date: input.date,
            notes: input.notes.filter(|n| !n.trim().is_empty()),
        })
    }

    /// Returns true if this donation counts toward the Zakat obligation.
    #[must_use]
    pub const fn is_qualifying(&self) -> bool {
        self.category.is_qualifying()
    }
}

fn ensure_positive(amount: Decimal) -> Result<(), RecordError> {
    if amount <= Decimal::ZERO {
        return Err(RecordError::NonPositiveAmount(amount));
    }
    Ok(())
}
