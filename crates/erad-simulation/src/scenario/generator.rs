//! Monte Carlo scenario generator.
//!
//! Each trial replays every asset's survival records in time order with one
//! uniform draw per record. The first draw above the recorded survival
//! probability is an outage; that asset draws no further in the trial.
//! Trial `i` draws from stream `i` of a `ChaCha8Rng` seeded with the run
//! seed, so trials are independent and results do not depend on whether
//! trials run in parallel.
//!
//! Draws are per record, not per distinct timestamp. The simulator appends
//! one record per event, so an asset hit by two events at the same instant
//! gets two draws at that timestamp.
//!
//! Draws lie in `[0, 1)` and an outage needs `draw > survival`, so a record
//! with survival `0.0` fails on every draw except an exact `0.0`, which has
//! probability 2^-53.

use std::time::Instant;

use chrono::{DateTime, Utc};
use erad_core::config::SamplingConfig;
use erad_core::constants::{DEFAULT_SEED, SCENARIO_NAME_PREFIX};
use erad_core::errors::SimulationError;
use erad_core::tracing::metrics;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::instrument;

use super::summary::ScenarioSummary;
use super::tracked_change::{PropertyEdit, TrackedChange};
use crate::asset::{Asset, AssetState, SurvivalAsset};

/// Name of trial `trial`: `sample_0`, `sample_1`, ...
pub fn scenario_name(trial: u32) -> String {
    format!("{SCENARIO_NAME_PREFIX}{trial}")
}

/// One sampled outage: asset index into the generator's slice.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Outage {
    pub timestamp: DateTime<Utc>,
    pub asset: usize,
}

/// Samples outage scenarios from assets that have been through the
/// exposure simulator.
pub struct ScenarioGenerator<'a, A: SurvivalAsset = Asset> {
    assets: &'a [A],
    seed: u64,
    parallel: bool,
}

impl<'a, A: SurvivalAsset> ScenarioGenerator<'a, A> {
    pub fn new(assets: &'a [A]) -> Self {
        Self {
            assets,
            seed: DEFAULT_SEED,
            parallel: false,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sample trials on the rayon pool.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_config(self, config: &SamplingConfig) -> Self {
        self.with_seed(config.effective_seed())
            .with_parallel(config.effective_parallel())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn assets(&self) -> &'a [A] {
        self.assets
    }

    /// Tracked changes of `number_of_samples` trials, ordered by trial,
    /// then timestamp, then asset order. Outages of one trial at one
    /// timestamp share a single change.
    #[instrument(skip(self), fields(seed = self.seed))]
    pub fn samples(&self, number_of_samples: u32) -> Result<Vec<TrackedChange>, SimulationError> {
        let started = Instant::now();
        let trials = self.sample_outages(number_of_samples)?;
        let changes: Vec<TrackedChange> = trials
            .into_iter()
            .enumerate()
            .flat_map(|(trial, outages)| self.tracked_changes(trial as u32, &outages))
            .collect();

        tracing::info!(
            { metrics::ASSET_COUNT } = self.assets.len(),
            { metrics::TRIAL_COUNT } = number_of_samples,
            { metrics::OUTAGE_COUNT } = changes.iter().map(|c| c.edits.len()).sum::<usize>(),
            { metrics::STAGE_DURATION_MS } = started.elapsed().as_millis() as u64,
            "scenario sampling complete"
        );
        Ok(changes)
    }

    /// Per-asset outage counts and rates over `number_of_samples` trials.
    pub fn summarize(&self, number_of_samples: u32) -> Result<ScenarioSummary, SimulationError> {
        let trials = self.sample_outages(number_of_samples)?;
        Ok(ScenarioSummary::from_trials(self.assets, &trials))
    }

    pub(crate) fn sample_outages(
        &self,
        number_of_samples: u32,
    ) -> Result<Vec<Vec<Outage>>, SimulationError> {
        if number_of_samples == 0 {
            return Err(SimulationError::InvalidArgument {
                name: "number_of_samples".to_string(),
                reason: "at least one trial is required".to_string(),
            });
        }
        let timelines = self.timelines();
        let trials = if self.parallel {
            (0..number_of_samples)
                .into_par_iter()
                .map(|trial| self.sample_trial(trial, &timelines))
                .collect()
        } else {
            (0..number_of_samples)
                .map(|trial| self.sample_trial(trial, &timelines))
                .collect()
        };
        Ok(trials)
    }

    /// Each asset's records sorted by timestamp. The sort is stable, so
    /// records sharing a timestamp keep their recorded order.
    fn timelines(&self) -> Vec<Vec<&'a AssetState>> {
        self.assets
            .iter()
            .map(|asset| {
                let mut states: Vec<&AssetState> = asset.states().iter().collect();
                states.sort_by_key(|s| s.timestamp);
                states
            })
            .collect()
    }

    fn trial_rng(&self, trial: u32) -> ChaCha8Rng {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        rng.set_stream(u64::from(trial));
        rng
    }

    fn sample_trial(&self, trial: u32, timelines: &[Vec<&AssetState>]) -> Vec<Outage> {
        let mut rng = self.trial_rng(trial);
        let mut outages = Vec::new();
        for (asset, states) in timelines.iter().enumerate() {
            for state in states {
                let draw: f64 = rng.gen();
                if draw > state.survival_probability {
                    outages.push(Outage {
                        timestamp: state.timestamp,
                        asset,
                    });
                    break;
                }
            }
        }
        outages.sort_by_key(|o| (o.timestamp, o.asset));
        outages
    }

    fn tracked_changes(&self, trial: u32, outages: &[Outage]) -> Vec<TrackedChange> {
        let name = scenario_name(trial);
        let mut changes: Vec<TrackedChange> = Vec::new();
        for outage in outages {
            let edit = PropertyEdit::out_of_service(self.assets[outage.asset].backing_id());
            match changes.last_mut() {
                Some(change) if change.timestamp == outage.timestamp => change.edits.push(edit),
                _ => changes.push(TrackedChange::new(name.clone(), outage.timestamp, vec![edit])),
            }
        }
        changes
    }
}
