//! Points calculation for validated receipts.
//!
//! Seven independent rules each contribute a non-negative number of points; the
//! score is their sum. All money arithmetic is done in integer cents.

use crate::core::receipt::{Item, Receipt};
use chrono::{Datelike, Timelike};
use std::fmt;

/// Points for a total with no cents.
const ROUND_DOLLAR_POINTS: u64 = 50;
/// Points for a total that is a multiple of 0.25.
const QUARTER_MULTIPLE_POINTS: u64 = 25;
/// Points for every two items.
const ITEM_PAIR_POINTS: u64 = 5;
/// Points for an odd purchase day.
const ODD_DAY_POINTS: u64 = 6;
/// Points for a purchase between 14:00 (inclusive) and 16:00 (exclusive).
const AFTERNOON_POINTS: u64 = 10;
const AFTERNOON_HOURS: std::ops::Range<u32> = 14..16;

/// The scoring rules, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// One point per alphanumeric character in the retailer name
    RetailerName,
    /// Total is a round dollar amount
    RoundDollarTotal,
    /// Total is a multiple of 0.25
    QuarterMultipleTotal,
    /// Five points per pair of items
    ItemPairs,
    /// Trimmed description length is a multiple of 3
    ItemDescriptions,
    /// Day of the purchase date is odd
    OddPurchaseDay,
    /// Purchased between 2:00pm and 4:00pm
    AfternoonPurchase,
}

impl Rule {
    /// Every rule, in the order they are applied.
    pub const ALL: [Self; 7] = [
        Self::RetailerName,
        Self::RoundDollarTotal,
        Self::QuarterMultipleTotal,
        Self::ItemPairs,
        Self::ItemDescriptions,
        Self::OddPurchaseDay,
        Self::AfternoonPurchase,
    ];

    /// Short label used in logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::RetailerName => "retailer name",
            Self::RoundDollarTotal => "round dollar total",
            Self::QuarterMultipleTotal => "total multiple of 0.25",
            Self::ItemPairs => "item pairs",
            Self::ItemDescriptions => "item descriptions",
            Self::OddPurchaseDay => "odd purchase day",
            Self::AfternoonPurchase => "afternoon purchase",
        }
    }

    /// Points this rule awards for `receipt`.
    #[must_use]
    pub fn apply(self, receipt: &Receipt) -> u64 {
        match self {
            Self::RetailerName => retailer_name_points(receipt.retailer()),
            Self::RoundDollarTotal => {
                award(receipt.total().cents() % 100 == 0, ROUND_DOLLAR_POINTS)
            }
            Self::QuarterMultipleTotal => {
                award(receipt.total().cents() % 25 == 0, QUARTER_MULTIPLE_POINTS)
            }
            Self::ItemPairs => (receipt.items().len() as u64 / 2).saturating_mul(ITEM_PAIR_POINTS),
            Self::ItemDescriptions => receipt
                .items()
                .iter()
                .map(item_description_points)
                .fold(0, u64::saturating_add),
            Self::OddPurchaseDay => award(receipt.purchase_date().day() % 2 == 1, ODD_DAY_POINTS),
            Self::AfternoonPurchase => award(
                AFTERNOON_HOURS.contains(&receipt.purchase_time().hour()),
                AFTERNOON_POINTS,
            ),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const fn award(condition: bool, points: u64) -> u64 {
    if condition { points } else { 0 }
}

fn retailer_name_points(retailer: &str) -> u64 {
    retailer.chars().filter(|c| c.is_alphanumeric()).count() as u64
}

/// `ceil(price * 0.2)` for items whose trimmed description length is a multiple of 3.
///
/// `price * 0.2` in dollars is `cents / 500`, so the ceiling is an integer
/// ceiling division.
fn item_description_points(item: &Item) -> u64 {
    let trimmed_len = item.short_description().trim().chars().count();
    if trimmed_len % 3 == 0 {
        item.price().cents().div_ceil(500)
    } else {
        0
    }
}

/// Points awarded by a single rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleContribution {
    /// The rule that was evaluated
    pub rule: Rule,
    /// Points it awarded (possibly zero)
    pub points: u64,
}

/// Per-rule result of scoring one receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBreakdown {
    /// One entry per rule, in [`Rule::ALL`] order
    pub contributions: Vec<RuleContribution>,
}

impl ScoreBreakdown {
    /// Sum of all contributions.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.contributions
            .iter()
            .map(|c| c.points)
            .fold(0, u64::saturating_add)
    }

    /// Points awarded by `rule`.
    #[must_use]
    pub fn points_for(&self, rule: Rule) -> u64 {
        self.contributions
            .iter()
            .find(|c| c.rule == rule)
            .map_or(0, |c| c.points)
    }
}

impl fmt::Display for ScoreBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .contributions
            .iter()
            .filter(|c| c.points > 0)
            .map(|c| format!("{}=+{}", c.rule, c.points))
            .collect();
        write!(f, "{} [{}]", self.total(), parts.join(", "))
    }
}

/// Evaluates every rule against `receipt`.
#[must_use]
pub fn score_breakdown(receipt: &Receipt) -> ScoreBreakdown {
    ScoreBreakdown {
        contributions: Rule::ALL
            .iter()
            .map(|&rule| RuleContribution {
                rule,
                points: rule.apply(receipt),
            })
            .collect(),
    }
}

/// Total points for `receipt`.
#[must_use]
pub fn score(receipt: &Receipt) -> u64 {
    score_breakdown(receipt).total()
}
