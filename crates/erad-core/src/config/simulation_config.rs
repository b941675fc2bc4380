//! Exposure simulation configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for the hazard exposure simulator.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Fragility curve set to evaluate. Default: "DEFAULT_CURVES".
    pub curve_set: Option<String>,
    /// Update assets in parallel for each hazard event. Default: false.
    pub parallel: Option<bool>,
}

impl SimulationConfig {
    /// Returns the effective curve set name, defaulting to `DEFAULT_CURVES`.
    pub fn effective_curve_set(&self) -> &str {
        self.curve_set
            .as_deref()
            .unwrap_or(constants::DEFAULT_CURVE_SET)
    }

    /// Returns whether per-asset updates run on the rayon pool.
    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(false)
    }
}
