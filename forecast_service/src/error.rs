//! Error types for the forecast_service crate

use price_model::ModelError;
use thiserror::Error;

/// Request-level failures that become user-visible errors.
///
/// Everything else the service encounters (malformed input, missing
/// historical files) is absorbed by defaults further down the stack.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No model is available for the requested commodity
    #[error("model not loaded for commodity: {0}")]
    ModelNotLoaded(String),

    /// The forecast adapter could not drive the loaded model
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ServiceError>;
