//! Outage statistics across Monte Carlo trials.

use erad_core::types::{AssetType, ComponentId};
use serde::{Deserialize, Serialize};

use super::generator::Outage;
use crate::asset::SurvivalAsset;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetOutageSummary {
    pub name: String,
    pub asset_type: AssetType,
    pub backing_id: ComponentId,
    /// Trials in which the asset failed.
    pub outages: u32,
    /// `outages / trials`.
    pub outage_rate: f64,
}

/// Per-asset outage counts over a batch of trials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSummary {
    pub trials: u32,
    pub assets: Vec<AssetOutageSummary>,
}

impl ScenarioSummary {
    pub(crate) fn from_trials<A: SurvivalAsset>(assets: &[A], trials: &[Vec<Outage>]) -> Self {
        let mut counts = vec![0u32; assets.len()];
        for outage in trials.iter().flatten() {
            counts[outage.asset] += 1;
        }
        let trial_count = trials.len() as u32;
        let assets = assets
            .iter()
            .zip(counts)
            .map(|(asset, outages)| AssetOutageSummary {
                name: asset.name().to_string(),
                asset_type: asset.asset_type(),
                backing_id: asset.backing_id(),
                outages,
                outage_rate: if trial_count == 0 {
                    0.0
                } else {
                    f64::from(outages) / f64::from(trial_count)
                },
            })
            .collect();
        Self {
            trials: trial_count,
            assets,
        }
    }

    pub fn total_outages(&self) -> u64 {
        self.assets.iter().map(|a| u64::from(a.outages)).sum()
    }

    /// Average number of failed assets per trial.
    pub fn mean_outages_per_trial(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.total_outages() as f64 / f64::from(self.trials)
    }

    /// The `n` assets with the highest outage rate; ties keep asset order.
    pub fn most_vulnerable(&self, n: usize) -> Vec<&AssetOutageSummary> {
        let mut ranked: Vec<&AssetOutageSummary> = self.assets.iter().collect();
        ranked.sort_by(|a, b| b.outages.cmp(&a.outages));
        ranked.truncate(n);
        ranked
    }

    pub fn get(&self, name: &str) -> Option<&AssetOutageSummary> {
        self.assets.iter().find(|a| a.name == name)
    }
}
