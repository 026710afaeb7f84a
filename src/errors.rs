//! Unified error type for the receipt processor.
//!
//! Every fallible operation in the crate returns [`Result`]. The HTTP layer maps
//! each variant onto a status code in [`crate::api::error`].

use crate::core::validation::Violation;
use thiserror::Error;

/// All errors the service can produce, from startup to request handling.
#[derive(Debug, Error)]
pub enum Error {
    /// Server configuration could not be read or is invalid.
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong while loading the configuration
        message: String,
    },

    /// The submitted receipt broke one or more format rules.
    #[error("Receipt failed validation ({} violation(s)): {}", .violations.len(), join_violations(.violations))]
    Validation {
        /// Every rule the receipt violated
        violations: Vec<Violation>,
    },

    /// The request body could not be read as a receipt document at all.
    #[error("Malformed request body: {message}")]
    MalformedBody {
        /// Deserializer message describing the problem
        message: String,
    },

    /// No score is stored under the requested identifier.
    #[error("No receipt found for id {id}")]
    ReceiptNotFound {
        /// The identifier that was looked up
        id: String,
    },

    /// I/O failure (config file, listener socket).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable could not be read.
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// The configured host/port pair is not a socket address.
    #[error("Invalid listen address: {0}")]
    Address(#[from] std::net::AddrParseError),
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
