//! Auto-ARIMA model family
//!
//! Artifacts of this family expose the `predict(n_periods)` convention: one
//! positional horizon count, an array of predictions back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Fitted auto-ARIMA model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoArimaModel {
    /// Fitted AR coefficients
    ar_coefficients: Vec<f64>,
    /// Model intercept
    intercept: f64,
    /// Trailing training observations, oldest first
    recent: Vec<f64>,
    /// When the model was fitted
    trained_at: DateTime<Utc>,
}

impl AutoArimaModel {
    /// Create a model from its fitted parameters.
    pub fn new(
        ar_coefficients: Vec<f64>,
        intercept: f64,
        recent: Vec<f64>,
        trained_at: DateTime<Utc>,
    ) -> Self {
        Self {
            ar_coefficients,
            intercept,
            recent,
            trained_at,
        }
    }

    /// When the model was fitted.
    pub fn trained_at(&self) -> DateTime<Utc> {
        self.trained_at
    }

    /// Forecast the next `n_periods` values.
    pub fn predict(&self, n_periods: usize) -> Result<Vec<f64>> {
        if self.recent.is_empty() || self.ar_coefficients.is_empty() {
            return Err(ModelError::ForecastingError(
                "Model has not been fitted to data".to_string(),
            ));
        }

        let p = self.ar_coefficients.len();

        // Seed the recursion with the last p training observations
        let mut history = self.recent[self.recent.len().saturating_sub(p)..].to_vec();
        let mut forecasts = Vec::with_capacity(n_periods);

        for _ in 0..n_periods {
            let mut next = self.intercept;
            for i in 0..p.min(history.len()) {
                next += self.ar_coefficients[i] * history[history.len() - 1 - i];
            }

            history.push(next);
            forecasts.push(next);
        }

        Ok(forecasts)
    }
}
