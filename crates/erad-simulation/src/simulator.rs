//! Hazard exposure simulator.
//!
//! Walks every distinct hazard timestamp in ascending order and, for each
//! event at that timestamp, asks every asset to append a survival record.

use std::time::Instant;

use erad_core::config::SimulationConfig;
use erad_core::constants::DEFAULT_CURVE_SET;
use erad_core::errors::{RunReport, SimulationError};
use erad_core::tracing::metrics;
use erad_fragility::CurveSet;
use rayon::prelude::*;
use tracing::instrument;

use crate::asset::{Asset, SurvivalAsset};
use crate::hazards::HazardModel;
use crate::systems::{AssetSystem, HazardSystem};

/// Counts from one simulator run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub timestamps: usize,
    pub events: usize,
    /// Asset updates that appended a record.
    pub updates: usize,
}

/// Drives hazard events over a set of assets.
pub struct HazardSimulator<A: SurvivalAsset = Asset> {
    assets: Vec<A>,
    parallel: bool,
    curve_set: String,
}

impl HazardSimulator<Asset> {
    pub fn from_system(system: AssetSystem) -> Self {
        Self::new(system.into_assets())
    }
}

impl<A: SurvivalAsset> HazardSimulator<A> {
    pub fn new(assets: Vec<A>) -> Self {
        Self {
            assets,
            parallel: false,
            curve_set: DEFAULT_CURVE_SET.to_string(),
        }
    }

    /// Update assets on the rayon pool for each event.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Curve set used by [`run_configured`](Self::run_configured).
    pub fn with_curve_set(mut self, name: impl Into<String>) -> Self {
        self.curve_set = name.into();
        self
    }

    pub fn with_config(self, config: &SimulationConfig) -> Self {
        self.with_parallel(config.effective_parallel())
            .with_curve_set(config.effective_curve_set())
    }

    pub fn curve_set(&self) -> &str {
        &self.curve_set
    }

    pub fn assets(&self) -> &[A] {
        &self.assets
    }

    pub fn into_assets(self) -> Vec<A> {
        self.assets
    }

    /// Evaluate every event of `hazards` against curve set `curve_set`.
    ///
    /// An unknown curve set falls back to the default one and records a
    /// warning. A failing asset update is recorded in the report and the
    /// run carries on. Records are appended, so running twice duplicates
    /// them.
    #[instrument(skip_all, fields(curve_set = curve_set))]
    pub fn run(&mut self, hazards: &HazardSystem, curve_set: &str) -> RunReport<RunStats> {
        let started = Instant::now();
        let mut report = RunReport::<RunStats>::default();

        let resolved = hazards.curves().resolve(curve_set);
        if let Some(warning) = resolved.warning(curve_set) {
            report.add_warning(warning);
        }
        let curves = resolved.set;

        let timestamps = hazards.timestamps();
        report.data.timestamps = timestamps.len();
        for timestamp in timestamps {
            for hazard in hazards.events_at(timestamp) {
                report.data.events += 1;
                let failures = self.apply(hazard, curves);
                report.data.updates += self.assets.len() - failures.len();
                for failure in failures {
                    report.add_error(failure);
                }
            }
        }

        tracing::info!(
            { metrics::ASSET_COUNT } = self.assets.len(),
            { metrics::HAZARD_TIMESTAMPS } = report.data.timestamps,
            { metrics::HAZARD_EVENTS } = report.data.events,
            { metrics::CURVE_SET } = curves.name.as_str(),
            { metrics::ASSET_FAILURES } = report.error_count(),
            { metrics::STAGE_DURATION_MS } = started.elapsed().as_millis() as u64,
            "hazard simulation complete"
        );
        report
    }

    /// [`run`](Self::run) against the curve set from `with_curve_set` or
    /// `with_config`, `DEFAULT_CURVES` when neither was given.
    pub fn run_configured(&mut self, hazards: &HazardSystem) -> RunReport<RunStats> {
        let curve_set = self.curve_set.clone();
        self.run(hazards, &curve_set)
    }

    fn apply(&mut self, hazard: &HazardModel, curves: &CurveSet) -> Vec<SimulationError> {
        let timestamp = hazard.timestamp;
        let update = |asset: &mut A| {
            asset
                .update_survival_probability(timestamp, hazard, curves)
                .map_err(|e| SimulationError::asset_update(asset.name(), timestamp.to_rfc3339(), e))
                .err()
        };
        let failures: Vec<SimulationError> = if self.parallel {
            self.assets.par_iter_mut().filter_map(update).collect()
        } else {
            self.assets.iter_mut().filter_map(update).collect()
        };
        for failure in &failures {
            tracing::warn!(hazard = %hazard.name, error = %failure, "asset update failed");
        }
        failures
    }
}
