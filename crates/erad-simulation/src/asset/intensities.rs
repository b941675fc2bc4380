//! Hazard intensities an asset can be exposed to at one instant.

use erad_core::types::HazardMeasure;
use erad_core::units::Quantity;
use serde::{Deserialize, Serialize};

/// One optional value per hazard intensity measure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HazardIntensities {
    pub peak_ground_velocity: Option<Quantity>,
    pub peak_ground_acceleration: Option<Quantity>,
    pub wind_speed: Option<Quantity>,
    pub flood_velocity: Option<Quantity>,
    pub flood_depth: Option<Quantity>,
    pub fire_boundary_dist: Option<Quantity>,
}

impl HazardIntensities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn earthquake(
        peak_ground_acceleration: Option<Quantity>,
        peak_ground_velocity: Option<Quantity>,
    ) -> Self {
        Self {
            peak_ground_acceleration,
            peak_ground_velocity,
            ..Self::default()
        }
    }

    pub fn flood(flood_depth: Option<Quantity>, flood_velocity: Option<Quantity>) -> Self {
        Self {
            flood_depth,
            flood_velocity,
            ..Self::default()
        }
    }

    pub fn fire(fire_boundary_dist: Quantity) -> Self {
        Self {
            fire_boundary_dist: Some(fire_boundary_dist),
            ..Self::default()
        }
    }

    pub fn wind(wind_speed: Quantity) -> Self {
        Self {
            wind_speed: Some(wind_speed),
            ..Self::default()
        }
    }

    pub fn get(&self, measure: HazardMeasure) -> Option<&Quantity> {
        match measure {
            HazardMeasure::PeakGroundVelocity => self.peak_ground_velocity.as_ref(),
            HazardMeasure::PeakGroundAcceleration => self.peak_ground_acceleration.as_ref(),
            HazardMeasure::WindSpeed => self.wind_speed.as_ref(),
            HazardMeasure::FloodVelocity => self.flood_velocity.as_ref(),
            HazardMeasure::FloodDepth => self.flood_depth.as_ref(),
            HazardMeasure::FireBoundaryDistance => self.fire_boundary_dist.as_ref(),
        }
    }

    fn slot(&mut self, measure: HazardMeasure) -> &mut Option<Quantity> {
        match measure {
            HazardMeasure::PeakGroundVelocity => &mut self.peak_ground_velocity,
            HazardMeasure::PeakGroundAcceleration => &mut self.peak_ground_acceleration,
            HazardMeasure::WindSpeed => &mut self.wind_speed,
            HazardMeasure::FloodVelocity => &mut self.flood_velocity,
            HazardMeasure::FloodDepth => &mut self.flood_depth,
            HazardMeasure::FireBoundaryDistance => &mut self.fire_boundary_dist,
        }
    }

    pub fn set(&mut self, measure: HazardMeasure, value: Option<Quantity>) {
        *self.slot(measure) = value;
    }

    pub fn with(mut self, measure: HazardMeasure, value: Quantity) -> Self {
        self.set(measure, Some(value));
        self
    }

    /// Present values, in [`HazardMeasure::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (HazardMeasure, &Quantity)> + '_ {
        HazardMeasure::ALL
            .into_iter()
            .filter_map(|m| self.get(m).map(|q| (m, q)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}
