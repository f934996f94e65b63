//! Forecast adapter: capability probing over opaque model handles
//!
//! Loaded models come from mutually incompatible families, each with its own
//! calling convention. The adapter tries a fixed, priority-ordered list of
//! convention probes and returns the first forecast that checks out. A probe
//! miss never propagates; only the exhaustion of every probe does.

use crate::error::{ModelError, Result};
use crate::handle::ModelHandle;
use crate::models::{AutoArimaModel, BoxJenkinsModel, StateSpaceModel};

/// Why a single convention probe did not produce a forecast.
#[derive(Debug)]
enum AdapterMiss {
    /// The handle is not of the family this probe understands
    WrongFamily,
    /// The family call itself failed
    CallFailed(String),
    /// The call returned the wrong number of values
    WrongLength { expected: usize, actual: usize },
    /// The call returned a non-finite value
    NonFinite,
}

/// One calling convention the adapter knows how to attempt.
trait ConventionProbe: Sync {
    /// Label used in diagnostics.
    fn name(&self) -> &'static str;

    /// Attempt this convention against the handle.
    fn try_forecast(&self, handle: &ModelHandle, steps: usize) -> StdResult<Vec<f64>>;
}

type StdResult<T> = std::result::Result<T, AdapterMiss>;

/// Reject series of the wrong length or with non-finite values.
fn check_series(series: Vec<f64>, steps: usize) -> StdResult<Vec<f64>> {
    if series.len() != steps {
        return Err(AdapterMiss::WrongLength {
            expected: steps,
            actual: series.len(),
        });
    }
    if series.iter().any(|v| !v.is_finite()) {
        return Err(AdapterMiss::NonFinite);
    }
    Ok(series)
}

/// The auto-ARIMA convention: `predict(n_periods)`.
struct NPeriodsProbe;

impl ConventionProbe for NPeriodsProbe {
    fn name(&self) -> &'static str {
        "predict(n_periods)"
    }

    fn try_forecast(&self, handle: &ModelHandle, steps: usize) -> StdResult<Vec<f64>> {
        let model = handle
            .downcast_ref::<AutoArimaModel>()
            .ok_or(AdapterMiss::WrongFamily)?;
        let series = model
            .predict(steps)
            .map_err(|err| AdapterMiss::CallFailed(err.to_string()))?;
        check_series(series, steps)
    }
}

/// The state-space convention: `get_forecast(steps).predicted_mean`.
struct PredictedMeanProbe;

impl ConventionProbe for PredictedMeanProbe {
    fn name(&self) -> &'static str {
        "get_forecast(steps)"
    }

    fn try_forecast(&self, handle: &ModelHandle, steps: usize) -> StdResult<Vec<f64>> {
        let model = handle
            .downcast_ref::<StateSpaceModel>()
            .ok_or(AdapterMiss::WrongFamily)?;
        let summary = model
            .get_forecast(steps)
            .map_err(|err| AdapterMiss::CallFailed(err.to_string()))?;
        check_series(summary.predicted_mean, steps)
    }
}

/// The Box-Jenkins convention: `forecast(steps)`.
struct StepsForecastProbe;

impl ConventionProbe for StepsForecastProbe {
    fn name(&self) -> &'static str {
        "forecast(steps)"
    }

    fn try_forecast(&self, handle: &ModelHandle, steps: usize) -> StdResult<Vec<f64>> {
        let model = handle
            .downcast_ref::<BoxJenkinsModel>()
            .ok_or(AdapterMiss::WrongFamily)?;
        let series = model
            .forecast(steps)
            .map_err(|err| AdapterMiss::CallFailed(err.to_string()))?;
        check_series(series, steps)
    }
}

/// Fixed probe order. The conventions are mutually exclusive per handle, so
/// the order only matters for determinism.
static PROBES: [&(dyn ConventionProbe); 3] =
    [&NPeriodsProbe, &PredictedMeanProbe, &StepsForecastProbe];

/// Forecast `steps` periods ahead from an opaque handle.
///
/// Probes run in their fixed priority order; each miss falls through to the
/// next convention. All probes missing is terminal for the request.
pub fn forecast(handle: &ModelHandle, steps: usize) -> Result<Vec<f64>> {
    for probe in PROBES {
        match probe.try_forecast(handle, steps) {
            Ok(series) => {
                tracing::debug!(convention = probe.name(), steps, "forecast produced");
                return Ok(series);
            }
            Err(miss) => {
                tracing::debug!(convention = probe.name(), ?miss, "convention missed");
            }
        }
    }

    Err(ModelError::UnsupportedInterface)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn state_space_handle() -> ModelHandle {
        ModelHandle::new(StateSpaceModel::new(500.0, 2.0, 10.0, Utc::now()))
    }

    #[test]
    fn test_auto_arima_resolves_via_first_convention() {
        let handle = ModelHandle::new(AutoArimaModel::new(
            vec![0.9],
            10.0,
            vec![100.0, 101.0],
            Utc::now(),
        ));
        let series = forecast(&handle, 4).unwrap();
        assert_eq!(series.len(), 4);
    }

    #[test]
    fn test_predicted_mean_convention_succeeds_after_earlier_miss() {
        // Probe 1 misses on family, probe 2 must pick this handle up
        let series = forecast(&state_space_handle(), 3).unwrap();
        assert_eq!(series, vec![502.0, 504.0, 506.0]);
    }

    #[test]
    fn test_box_jenkins_resolves_via_last_convention() {
        let handle = ModelHandle::new(BoxJenkinsModel::new(
            vec![0.5],
            vec![0.1],
            1500.0,
            vec![5.0],
            vec![0.5],
            Utc::now(),
        ));
        let series = forecast(&handle, 2).unwrap();
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn test_unknown_family_exhausts_all_probes() {
        let handle = ModelHandle::new("not a model".to_string());
        let err = forecast(&handle, 7).unwrap_err();
        assert!(matches!(err, ModelError::UnsupportedInterface));
        assert_eq!(
            err.to_string(),
            "Unsupported model interface for automatic forecasting"
        );
    }

    #[test]
    fn test_non_finite_output_is_a_miss() {
        // An AR coefficient of infinity poisons the recursion; the probe for
        // this family must reject the series rather than surface it
        let handle = ModelHandle::new(AutoArimaModel::new(
            vec![f64::INFINITY],
            0.0,
            vec![1.0],
            Utc::now(),
        ));
        let err = forecast(&handle, 2).unwrap_err();
        assert!(matches!(err, ModelError::UnsupportedInterface));
    }

    #[rstest::rstest]
    #[case(1)]
    #[case(7)]
    #[case(30)]
    fn test_forecast_length_matches_the_horizon(#[case] steps: usize) {
        let series = forecast(&state_space_handle(), steps).unwrap();
        assert_eq!(series.len(), steps);
        assert!(series.iter().all(|v| v.is_finite()));
    }
}
