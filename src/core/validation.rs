//! Receipt validation.
//!
//! Each field has its own check returning either the typed value or a [`Violation`].
//! [`validate_receipt`] runs every check and reports all violations at once, so a
//! client sees everything wrong with a document in a single response.

use crate::core::receipt::{Amount, Item, RawItem, RawReceipt, Receipt};
use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use serde::Serialize;
use std::{fmt, sync::LazyLock};

#[allow(clippy::expect_used)]
static RETAILER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w\s\-&]+$").expect("Invalid retailer regex"));

#[allow(clippy::expect_used)]
static DESCRIPTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w\s\-]+$").expect("Invalid description regex"));

#[allow(clippy::expect_used)]
static DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Invalid date regex"));

/// One broken rule: which field, and what is wrong with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// JSON path of the offending value, e.g. `items[2].price`
    pub field: String,
    /// Human-readable description of the rule that failed
    pub message: String,
}

impl Violation {
    /// Creates a violation for `field`.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validates a submitted document and converts it into a [`Receipt`].
///
/// Returns every violated rule when the document is rejected. Nothing is ever
/// partially accepted.
///
/// # Errors
/// Returns the list of [`Violation`]s if any field fails its format rule or the
/// receipt has no items.
pub fn validate_receipt(raw: &RawReceipt) -> Result<Receipt, Vec<Violation>> {
    let mut violations = Vec::new();

    let retailer = validate_retailer(&raw.retailer).map_err(|v| violations.push(v));
    let purchase_date = validate_purchase_date(&raw.purchase_date).map_err(|v| violations.push(v));
    let purchase_time = validate_purchase_time(&raw.purchase_time).map_err(|v| violations.push(v));

    if raw.items.is_empty() {
        violations.push(Violation::new("items", "must contain at least one item"));
    }
    let mut items = Vec::with_capacity(raw.items.len());
    for (index, item) in raw.items.iter().enumerate() {
        match validate_item(index, item) {
            Ok(item) => items.push(item),
            Err(mut item_violations) => violations.append(&mut item_violations),
        }
    }

    let total = validate_amount("total", &raw.total).map_err(|v| violations.push(v));

    match (retailer, purchase_date, purchase_time, total) {
        (Ok(retailer), Ok(purchase_date), Ok(purchase_time), Ok(total)) if violations.is_empty() => {
            Ok(Receipt {
                retailer,
                purchase_date,
                purchase_time,
                items,
                total,
            })
        }
        _ => Err(violations),
    }
}

/// Checks the retailer name against `^[\w\s\-&]+$`.
///
/// # Errors
/// Returns a [`Violation`] when the name is empty or contains other characters.
pub fn validate_retailer(value: &str) -> Result<String, Violation> {
    if RETAILER_PATTERN.is_match(value) {
        Ok(value.to_string())
    } else {
        Err(Violation::new(
            "retailer",
            "must be non-empty and contain only letters, digits, underscores, whitespace, '-' or '&'",
        ))
    }
}

/// Parses a `YYYY-MM-DD` purchase date, rejecting dates that do not exist.
///
/// # Errors
/// Returns a [`Violation`] for a wrong shape or an impossible date such as `2022-02-30`.
pub fn validate_purchase_date(value: &str) -> Result<NaiveDate, Violation> {
    if !DATE_SHAPE.is_match(value) {
        return Err(Violation::new("purchaseDate", "must be in YYYY-MM-DD format"));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| Violation::new("purchaseDate", "must be a real calendar date"))
}

/// Parses a 24-hour `HH:MM` purchase time.
///
/// # Errors
/// Returns a [`Violation`] unless the value is two numeric parts separated by `:`
/// with hour in 0..=23 and minute in 0..=59.
pub fn validate_purchase_time(value: &str) -> Result<NaiveTime, Violation> {
    let format_violation = || Violation::new("purchaseTime", "must be in HH:MM format");

    let parts: Vec<&str> = value.split(':').collect();
    let [hour, minute] = parts.as_slice() else {
        return Err(format_violation());
    };
    let hour = parse_clock_part(hour).ok_or_else(format_violation)?;
    let minute = parse_clock_part(minute).ok_or_else(format_violation)?;

    if hour > 23 || minute > 59 {
        return Err(Violation::new(
            "purchaseTime",
            "must be a valid time (hour 0-23, minute 0-59)",
        ));
    }
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(format_violation)
}

fn parse_clock_part(part: &str) -> Option<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Absurdly long digit runs overflow and are simply out of range.
    Some(part.parse().unwrap_or(u32::MAX))
}

/// Parses an amount field (`price` or `total`) into cents.
///
/// # Errors
/// Returns a [`Violation`] naming `field` when the value is not `<digits>.<2 digits>`
/// or is too large to represent.
pub fn validate_amount(field: &str, value: &str) -> Result<Amount, Violation> {
    value
        .parse::<Amount>()
        .map_err(|e| Violation::new(field, e.to_string()))
}

fn validate_item(index: usize, raw: &RawItem) -> Result<Item, Vec<Violation>> {
    let mut violations = Vec::new();

    if !DESCRIPTION_PATTERN.is_match(&raw.short_description) {
        violations.push(Violation::new(
            format!("items[{index}].shortDescription"),
            "must be non-empty and contain only letters, digits, underscores, whitespace or '-'",
        ));
    }
    let price = validate_amount(&format!("items[{index}].price"), &raw.price)
        .map_err(|v| violations.push(v));

    match price {
        Ok(price) if violations.is_empty() => Ok(Item {
            short_description: raw.short_description.clone(),
            price,
        }),
        _ => Err(violations),
    }
}
