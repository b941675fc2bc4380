//! Assets and their time series of hazard exposure.

mod intensities;

pub use intensities::HazardIntensities;

use chrono::{DateTime, Utc};
use erad_core::errors::SimulationError;
use erad_core::types::{AssetType, BusId, ComponentId};
use erad_core::units::{Quantity, Unit};
use erad_fragility::{CurveSet, PoleCovariates};
use serde::{Deserialize, Serialize};

use crate::hazards::HazardModel;

/// One time-stamped exposure record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetState {
    pub timestamp: DateTime<Utc>,
    pub intensities: HazardIntensities,
    pub survival_probability: f64,
}

/// Anything the simulator can expose to hazards and the scenario generator
/// can sample outages for.
pub trait SurvivalAsset: Send + Sync {
    fn name(&self) -> &str;

    fn asset_type(&self) -> AssetType;

    /// Component of the backing topology that goes out of service.
    fn backing_id(&self) -> ComponentId;

    /// Exposure records, in the order they were appended.
    fn states(&self) -> &[AssetState];

    /// Evaluate `hazard` against `curves` and append one record at
    /// `timestamp`.
    fn update_survival_probability(
        &mut self,
        timestamp: DateTime<Utc>,
        hazard: &HazardModel,
        curves: &CurveSet,
    ) -> Result<(), SimulationError>;
}

/// A physical asset mapped onto one component of a distribution model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub name: String,
    pub asset_type: AssetType,
    pub backing_id: ComponentId,
    #[serde(default)]
    pub connections: Vec<BusId>,
    pub height: Quantity,
    pub elevation: Quantity,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub pole: Option<PoleCovariates>,
    #[serde(default)]
    pub states: Vec<AssetState>,
}

impl Asset {
    /// A 3 m asset at sea level, at the origin, with no states.
    pub fn new(name: impl Into<String>, asset_type: AssetType, backing_id: ComponentId) -> Self {
        Self {
            name: name.into(),
            asset_type,
            backing_id,
            connections: Vec::new(),
            height: Quantity::new(3.0, Unit::Meter),
            elevation: Quantity::new(0.0, Unit::Meter),
            latitude: 0.0,
            longitude: 0.0,
            pole: None,
            states: Vec::new(),
        }
    }

    pub fn with_connections(mut self, connections: Vec<BusId>) -> Self {
        self.connections = connections;
        self
    }

    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    pub fn with_height(mut self, height: Quantity) -> Self {
        self.height = height;
        self
    }

    pub fn with_elevation(mut self, elevation: Quantity) -> Self {
        self.elevation = elevation;
        self
    }

    pub fn with_pole(mut self, pole: PoleCovariates) -> Self {
        self.pole = Some(pole);
        self
    }

    /// Survival against `exposure`: the product of `1 - p` over every
    /// measure that has both a value and a curve for this asset type.
    pub fn survival_probability(
        &self,
        exposure: &HazardIntensities,
        curves: &CurveSet,
    ) -> Result<f64, SimulationError> {
        let mut survival = 1.0;
        for (measure, value) in exposure.iter() {
            let Some(function) = curves.lookup(measure, self.asset_type) else {
                continue;
            };
            let model = function.model_for(self.pole.as_ref())?;
            let failure = model.probability(value)?;
            survival *= 1.0 - failure;
        }
        Ok(survival)
    }

    /// Latest record, by timestamp.
    pub fn latest_state(&self) -> Option<&AssetState> {
        self.states.iter().max_by_key(|s| s.timestamp)
    }
}

impl SurvivalAsset for Asset {
    fn name(&self) -> &str {
        &self.name
    }

    fn asset_type(&self) -> AssetType {
        self.asset_type
    }

    fn backing_id(&self) -> ComponentId {
        self.backing_id
    }

    fn states(&self) -> &[AssetState] {
        &self.states
    }

    fn update_survival_probability(
        &mut self,
        timestamp: DateTime<Utc>,
        hazard: &HazardModel,
        curves: &CurveSet,
    ) -> Result<(), SimulationError> {
        let intensities = hazard.exposure_for(&self.name);
        let survival_probability = self.survival_probability(&intensities, curves)?;
        tracing::trace!(
            asset = %self.name,
            hazard = %hazard.name,
            survival_probability,
            "asset state updated"
        );
        self.states.push(AssetState {
            timestamp,
            intensities,
            survival_probability,
        });
        Ok(())
    }
}
