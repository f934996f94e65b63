//! Box-Jenkins model family
//!
//! Artifacts of this family expose the `forecast(steps)` convention: the
//! horizon as a keyword-style count, an array of predictions back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Fitted Box-Jenkins (ARMA) model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoxJenkinsModel {
    /// Fitted AR coefficients
    ar_coefficients: Vec<f64>,
    /// Fitted MA coefficients
    ma_coefficients: Vec<f64>,
    /// Series mean removed before fitting
    mean: f64,
    /// Trailing centered observations, oldest first
    history: Vec<f64>,
    /// Trailing residuals, oldest first
    residuals: Vec<f64>,
    /// When the model was fitted
    trained_at: DateTime<Utc>,
}

impl BoxJenkinsModel {
    /// Create a model from its fitted parameters.
    pub fn new(
        ar_coefficients: Vec<f64>,
        ma_coefficients: Vec<f64>,
        mean: f64,
        history: Vec<f64>,
        residuals: Vec<f64>,
        trained_at: DateTime<Utc>,
    ) -> Self {
        Self {
            ar_coefficients,
            ma_coefficients,
            mean,
            history,
            residuals,
            trained_at,
        }
    }

    /// When the model was fitted.
    pub fn trained_at(&self) -> DateTime<Utc> {
        self.trained_at
    }

    /// Forecast `steps` periods ahead.
    pub fn forecast(&self, steps: usize) -> Result<Vec<f64>> {
        if self.history.is_empty() {
            return Err(ModelError::ForecastingError(
                "Model has not been fitted to data".to_string(),
            ));
        }

        let p = self.ar_coefficients.len();
        let q = self.ma_coefficients.len();

        let mut centered = self.history.clone();
        let mut shocks = self.residuals.clone();
        let mut forecasts = Vec::with_capacity(steps);

        for _ in 0..steps {
            let mut next = 0.0;
            for i in 0..p.min(centered.len()) {
                next += self.ar_coefficients[i] * centered[centered.len() - 1 - i];
            }
            for j in 0..q.min(shocks.len()) {
                next += self.ma_coefficients[j] * shocks[shocks.len() - 1 - j];
            }

            // Future shocks are unknown and enter the recursion as zero
            centered.push(next);
            shocks.push(0.0);
            forecasts.push(next + self.mean);
        }

        Ok(forecasts)
    }
}
