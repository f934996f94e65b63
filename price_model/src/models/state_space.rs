//! State-space model family
//!
//! Artifacts of this family expose the `get_forecast(steps)` convention and
//! report predictions indirectly, through a summary object carrying the
//! predicted mean.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Forecast summary produced by a state-space model.
#[derive(Debug, Clone)]
pub struct ForecastSummary {
    /// Mean of the forecast distribution per future step
    pub predicted_mean: Vec<f64>,
    /// Standard error of the mean per future step
    pub se_mean: Vec<f64>,
}

/// Fitted state-space model with smoothed level and trend components.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateSpaceModel {
    /// Smoothed level at the training cutoff
    level: f64,
    /// Smoothed trend at the training cutoff
    trend: f64,
    /// Residual standard deviation from fitting
    resid_std: f64,
    /// When the model was fitted
    trained_at: DateTime<Utc>,
}

impl StateSpaceModel {
    /// Create a model from its fitted state.
    pub fn new(level: f64, trend: f64, resid_std: f64, trained_at: DateTime<Utc>) -> Self {
        Self {
            level,
            trend,
            resid_std,
            trained_at,
        }
    }

    /// When the model was fitted.
    pub fn trained_at(&self) -> DateTime<Utc> {
        self.trained_at
    }

    /// Forecast `steps` periods ahead.
    pub fn get_forecast(&self, steps: usize) -> Result<ForecastSummary> {
        if !self.level.is_finite() || !self.trend.is_finite() {
            return Err(ModelError::ForecastingError(
                "State vector is degenerate".to_string(),
            ));
        }

        let mut predicted_mean = Vec::with_capacity(steps);
        let mut se_mean = Vec::with_capacity(steps);

        // Linear extrapolation of the level along the trend; uncertainty
        // widens with the square root of the horizon
        for h in 1..=steps {
            predicted_mean.push(self.level + self.trend * h as f64);
            se_mean.push(self.resid_std * (h as f64).sqrt());
        }

        Ok(ForecastSummary {
            predicted_mean,
            se_mean,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_extends_level_along_trend() {
        let model = StateSpaceModel::new(1000.0, 5.0, 12.0, Utc::now());
        let summary = model.get_forecast(3).unwrap();
        assert_eq!(summary.predicted_mean, vec![1005.0, 1010.0, 1015.0]);
        assert_eq!(summary.se_mean.len(), 3);
        assert!(summary.se_mean[0] < summary.se_mean[2]);
    }

    #[test]
    fn test_degenerate_state_is_rejected() {
        let model = StateSpaceModel::new(f64::NAN, 0.0, 1.0, Utc::now());
        assert!(model.get_forecast(2).is_err());
    }
}
