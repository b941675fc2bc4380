//! Monte Carlo sampling configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for the scenario generator.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SamplingConfig {
    /// Number of independent trials. Default: 1.
    pub number_of_samples: Option<u32>,
    /// Run seed; trial `i` draws from stream `i` of this seed. Default: 42.
    pub seed: Option<u64>,
    /// Sample trials in parallel. Default: false.
    pub parallel: Option<bool>,
}

impl SamplingConfig {
    /// Returns the effective number of samples, defaulting to 1.
    pub fn effective_number_of_samples(&self) -> u32 {
        self.number_of_samples
            .unwrap_or(constants::DEFAULT_NUMBER_OF_SAMPLES)
    }

    /// Returns the effective seed, defaulting to 42.
    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or(constants::DEFAULT_SEED)
    }

    /// Returns whether trials are sampled in parallel.
    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(false)
    }
}
