//! Hazard events and the intensities they expose assets to.

use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone, Utc};
use erad_core::errors::SimulationError;
use erad_core::types::HazardKind;
use erad_core::units::{Quantity, Unit};
use serde::{Deserialize, Serialize};

use crate::asset::HazardIntensities;

/// How an event's intensities reach assets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HazardExposure {
    /// Every asset sees the same intensities.
    Uniform(HazardIntensities),
    /// Intensities keyed by asset name; assets not listed are unexposed.
    PerAsset(BTreeMap<String, HazardIntensities>),
}

/// One hazard event at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardModel {
    pub name: String,
    pub timestamp: DateTime<Utc>,
    pub kind: HazardKind,
    pub exposure: HazardExposure,
}

impl HazardModel {
    pub fn new(
        name: impl Into<String>,
        timestamp: DateTime<Utc>,
        kind: HazardKind,
        exposure: HazardExposure,
    ) -> Result<Self, SimulationError> {
        let model = Self {
            name: name.into(),
            timestamp,
            kind,
            exposure,
        };
        model.validate()?;
        Ok(model)
    }

    pub fn uniform(
        name: impl Into<String>,
        timestamp: DateTime<Utc>,
        kind: HazardKind,
        intensities: HazardIntensities,
    ) -> Result<Self, SimulationError> {
        Self::new(name, timestamp, kind, HazardExposure::Uniform(intensities))
    }

    pub fn per_asset(
        name: impl Into<String>,
        timestamp: DateTime<Utc>,
        kind: HazardKind,
        intensities: BTreeMap<String, HazardIntensities>,
    ) -> Result<Self, SimulationError> {
        Self::new(name, timestamp, kind, HazardExposure::PerAsset(intensities))
    }

    /// A uniform event of `kind` at 2024-08-01 12:00 UTC.
    pub fn example(kind: HazardKind) -> Self {
        let intensities = match kind {
            HazardKind::Earthquake => HazardIntensities::earthquake(
                Some(Quantity::new(0.3, Unit::StandardGravity)),
                Some(Quantity::new(40.0, Unit::CentimeterPerSecond)),
            ),
            HazardKind::Flood => HazardIntensities::flood(
                Some(Quantity::new(10.0, Unit::Foot)),
                Some(Quantity::new(2.0, Unit::MeterPerSecond)),
            ),
            HazardKind::Fire => HazardIntensities::fire(Quantity::new(0.5, Unit::Kilometer)),
            HazardKind::Wind => HazardIntensities::wind(Quantity::new(50.0, Unit::MilePerHour)),
        };
        Self {
            name: format!("{kind} 1"),
            timestamp: Utc
                .with_ymd_and_hms(2024, 8, 1, 12, 0, 0)
                .single()
                .unwrap_or_default(),
            kind,
            exposure: HazardExposure::Uniform(intensities),
        }
    }

    /// Intensities `asset` sees; empty when the event does not reach it.
    pub fn exposure_for(&self, asset: &str) -> HazardIntensities {
        match &self.exposure {
            HazardExposure::Uniform(intensities) => *intensities,
            HazardExposure::PerAsset(by_asset) => {
                by_asset.get(asset).copied().unwrap_or_default()
            }
        }
    }

    /// Every intensity must be a measure of this kind of hazard, expressed
    /// in a unit of that measure's dimension.
    pub fn validate(&self) -> Result<(), SimulationError> {
        let check = |intensities: &HazardIntensities| -> Result<(), SimulationError> {
            for (measure, value) in intensities.iter() {
                if !self.kind.measures().contains(&measure) {
                    return Err(SimulationError::InvalidArgument {
                        name: format!("{}.{measure}", self.name),
                        reason: format!("{} events do not carry {measure}", self.kind),
                    });
                }
                if value.dimension() != measure.dimension() {
                    return Err(SimulationError::InvalidArgument {
                        name: format!("{}.{measure}", self.name),
                        reason: format!("{value} is not a {}", measure.dimension()),
                    });
                }
            }
            Ok(())
        };
        match &self.exposure {
            HazardExposure::Uniform(intensities) => check(intensities),
            HazardExposure::PerAsset(by_asset) => by_asset.values().try_for_each(check),
        }
    }
}
