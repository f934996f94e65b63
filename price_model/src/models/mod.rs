//! Fitted model families persisted as on-disk artifacts
//!
//! Each family mimics the calling convention of the forecasting library it
//! was exported from, so the families are mutually incompatible on purpose:
//! consumers go through the adapter's probe chain instead of matching on a
//! family directly.

use serde::{Deserialize, Serialize};

use crate::handle::ModelHandle;

pub mod auto_arima;
pub mod box_jenkins;
pub mod state_space;

pub use auto_arima::AutoArimaModel;
pub use box_jenkins::BoxJenkinsModel;
pub use state_space::{ForecastSummary, StateSpaceModel};

/// On-disk envelope for a fitted model artifact.
///
/// The variant is only inspected while decoding; `into_handle` erases it so
/// the rest of the system treats every model uniformly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ModelArtifact {
    /// Auto-ARIMA family, `predict(n_periods)` convention
    AutoArima(AutoArimaModel),
    /// State-space family, `get_forecast(steps)` convention
    StateSpace(StateSpaceModel),
    /// Box-Jenkins family, `forecast(steps)` convention
    BoxJenkins(BoxJenkinsModel),
}

impl ModelArtifact {
    /// Erase the family into an opaque handle.
    pub fn into_handle(self) -> ModelHandle {
        match self {
            ModelArtifact::AutoArima(model) => ModelHandle::new(model),
            ModelArtifact::StateSpace(model) => ModelHandle::new(model),
            ModelArtifact::BoxJenkins(model) => ModelHandle::new(model),
        }
    }
}
