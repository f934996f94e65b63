//! Error types for the market_history crate

use thiserror::Error;

/// Internal errors raised while scanning a historical source.
///
/// These never cross the crate boundary as failures: the public entry points
/// absorb them into documented fallbacks (default bounds, empty catalogs).
#[derive(Debug, Error)]
pub enum HistoryError {
    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from CSV parsing
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, HistoryError>;
