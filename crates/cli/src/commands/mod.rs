//! Subcommand implementations.
//!
//! Each command writes its report to the given writer so it can be tested
//! without a terminal.

pub mod catalog;
pub mod coverage;
pub mod quote;

use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Writing the report failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    /// A service ID is not in the catalog.
    #[error("Unknown service: {0}. Run `bc-cli catalog` to list services")]
    UnknownService(String),

    /// The ZIP code could not be parsed.
    #[error(transparent)]
    InvalidZip(#[from] black_cable_core::ZipCodeError),

    /// JSON encoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
