//! Receipt data model.
//!
//! Two layers live here: the wire documents ([`RawReceipt`], [`RawItem`]) exactly as
//! clients send them, and the validated forms ([`Receipt`], [`Item`]) that the scoring
//! engine consumes. A [`Receipt`] can only be produced by
//! [`crate::core::validation::validate_receipt`], so holding one means every format
//! rule has already passed.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// One purchased line as submitted by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawItem {
    /// Free-text description of the item
    pub short_description: String,
    /// Price with exactly two fractional digits, e.g. `"2.25"`
    pub price: String,
}

/// A receipt document as submitted by the client, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReceipt {
    /// Retailer or store name
    pub retailer: String,
    /// Purchase date, `YYYY-MM-DD`
    pub purchase_date: String,
    /// Purchase time, 24-hour `HH:MM`
    pub purchase_time: String,
    /// Purchased items, in receipt order
    pub items: Vec<RawItem>,
    /// Total amount paid, e.g. `"35.35"`
    pub total: String,
}

/// A validated purchase line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub(crate) short_description: String,
    pub(crate) price: Amount,
}

impl Item {
    /// The description as submitted (untrimmed).
    #[must_use]
    pub fn short_description(&self) -> &str {
        &self.short_description
    }

    /// The item price.
    #[must_use]
    pub const fn price(&self) -> Amount {
        self.price
    }
}

/// A receipt that has passed every validation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub(crate) retailer: String,
    pub(crate) purchase_date: NaiveDate,
    pub(crate) purchase_time: NaiveTime,
    pub(crate) items: Vec<Item>,
    pub(crate) total: Amount,
}

impl Receipt {
    /// Retailer name as submitted.
    #[must_use]
    pub fn retailer(&self) -> &str {
        &self.retailer
    }

    /// Calendar date of purchase.
    #[must_use]
    pub const fn purchase_date(&self) -> NaiveDate {
        self.purchase_date
    }

    /// Time of purchase, minute precision.
    #[must_use]
    pub const fn purchase_time(&self) -> NaiveTime {
        self.purchase_time
    }

    /// Purchased items; never empty.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Receipt total.
    #[must_use]
    pub const fn total(&self) -> Amount {
        self.total
    }
}

/// Why a string could not be read as an [`Amount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AmountError {
    /// Not of the form `<digits>.<two digits>`
    #[error("must be a decimal amount with exactly two fractional digits, e.g. \"2.25\"")]
    Format,
    /// Well-formed but too large to represent
    #[error("is too large")]
    OutOfRange,
}

/// Non-negative currency value stored as whole cents.
///
/// Parsing is purely textual so no floating-point rounding ever touches a price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount {
    cents: u64,
}

impl Amount {
    /// Builds an amount from a cent count.
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    /// The amount in cents.
    #[must_use]
    pub const fn cents(self) -> u64 {
        self.cents
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (dollars, cents) = s.split_once('.').ok_or(AmountError::Format)?;
        let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(dollars) || !all_digits(cents) || cents.len() != 2 {
            return Err(AmountError::Format);
        }

        // Only overflow can make an all-digit string fail to parse.
        let dollars: u64 = dollars.parse().map_err(|_| AmountError::OutOfRange)?;
        let cents: u64 = cents.parse().map_err(|_| AmountError::Format)?;

        dollars
            .checked_mul(100)
            .and_then(|d| d.checked_add(cents))
            .map(Self::from_cents)
            .ok_or(AmountError::OutOfRange)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}
