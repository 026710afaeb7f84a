//! Shared test fixtures for the receipt processor.
//!
//! Builders here return wire documents ([`RawReceipt`]) so tests exercise the same
//! path a client request takes: validate first, then score.

use crate::core::receipt::{RawItem, RawReceipt};
use crate::store::{MemoryScoreStore, ScoreStore};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Installs a test-friendly tracing subscriber once per test binary.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates an empty in-memory store behind the trait object the service uses.
pub fn test_store() -> Arc<dyn ScoreStore> {
    Arc::new(MemoryScoreStore::new())
}

/// Builds a single item.
pub fn raw_item(short_description: &str, price: &str) -> RawItem {
    RawItem {
        short_description: short_description.to_string(),
        price: price.to_string(),
    }
}

/// The five-item Target receipt; scores 28.
pub fn target_receipt() -> RawReceipt {
    RawReceipt {
        retailer: "Target".to_string(),
        purchase_date: "2022-01-01".to_string(),
        purchase_time: "13:01".to_string(),
        items: vec![
            raw_item("Mountain Dew 12PK", "6.49"),
            raw_item("Emils Cheese Pizza", "12.25"),
            raw_item("Knorr Creamy Chicken", "1.26"),
            raw_item("Doritos Nacho Cheese", "3.35"),
            raw_item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
        ],
        total: "35.35".to_string(),
    }
}

/// Four Gatorades at M&M Corner Market; scores 109.
pub fn mm_corner_market_receipt() -> RawReceipt {
    RawReceipt {
        retailer: "M&M Corner Market".to_string(),
        purchase_date: "2022-03-20".to_string(),
        purchase_time: "14:33".to_string(),
        items: vec![raw_item("Gatorade", "2.25"); 4],
        total: "9.00".to_string(),
    }
}

/// A one-item receipt from "Shop" with the given total, date and time.
///
/// The retailer and the single "Soda" item contribute 4 points between them, so
/// tests can isolate the rules driven by the other fields.
pub fn simple_receipt(total: &str, purchase_date: &str, purchase_time: &str) -> RawReceipt {
    RawReceipt {
        retailer: "Shop".to_string(),
        purchase_date: purchase_date.to_string(),
        purchase_time: purchase_time.to_string(),
        items: vec![raw_item("Soda", "1.00")],
        total: total.to_string(),
    }
}
