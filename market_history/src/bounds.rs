//! Observed price ranges with literal fallback defaults

use serde::{Deserialize, Serialize};

/// Historical observed price range for a commodity, used for display
/// scaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBounds {
    /// Lowest observed price, when known
    pub min: Option<f64>,
    /// Highest observed price, when known
    pub max: Option<f64>,
}

impl PriceBounds {
    pub(crate) const UNKNOWN: PriceBounds = PriceBounds {
        min: None,
        max: None,
    };

    pub(crate) const fn known(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// A range with either end still unobserved.
    pub(crate) fn is_unknown(&self) -> bool {
        self.min.is_none() || self.max.is_none()
    }

    /// Fold one row's observed values into the running range.
    pub(crate) fn absorb(&mut self, values: &[f64]) {
        if values.is_empty() {
            return;
        }
        let row_min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let row_max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        self.min = Some(match self.min {
            Some(current) => current.min(row_min),
            None => row_min,
        });
        self.max = Some(match self.max {
            Some(current) => current.max(row_max),
            None => row_max,
        });
    }
}

/// Fallback ranges used when a commodity's history is missing, unreadable or
/// yields no numeric values. The literals are part of the public contract.
pub(crate) fn default_bounds(commodity: &str) -> PriceBounds {
    match commodity {
        "onion" => PriceBounds::known(200.0, 7000.0),
        "potato" => PriceBounds::known(200.0, 6000.0),
        "wheat" => PriceBounds::known(1000.0, 4000.0),
        "rice" => PriceBounds::known(1500.0, 6000.0),
        _ => PriceBounds::known(0.0, 10000.0),
    }
}
