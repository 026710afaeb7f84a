//! Core business logic - framework-agnostic receipt validation, scoring and processing.

/// Wire and validated receipt types
pub mod receipt;
/// Process / look-up workflow over a score store
pub mod receipts;
/// The seven points rules
pub mod scoring;
/// Field-level format rules
pub mod validation;

pub use receipt::{Amount, Item, RawItem, RawReceipt, Receipt};
pub use receipts::{get_points, process_receipt};
pub use scoring::{Rule, ScoreBreakdown, score, score_breakdown};
pub use validation::{Violation, validate_receipt};
