//! Error types for the price_model crate

use thiserror::Error;

/// Custom error types for the price_model crate
#[derive(Debug, Error)]
pub enum ModelError {
    /// Artifact bytes could not be decoded in any supported format
    #[error("Load error: {0}")]
    LoadError(String),

    /// Error related to forecasting operations
    #[error("Forecasting error: {0}")]
    ForecastingError(String),

    /// No supported calling convention produced a usable forecast
    #[error("Unsupported model interface for automatic forecasting")]
    UnsupportedInterface,

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ModelError>;
