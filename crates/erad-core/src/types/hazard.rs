//! Hazard kinds and the intensity measures fragility is evaluated along.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::units::Dimension;

/// Kind of hazard event. `ALL` is the fixed processing order used when
/// several events share a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HazardKind {
    Earthquake,
    Flood,
    Fire,
    Wind,
}

impl HazardKind {
    pub const ALL: [HazardKind; 4] = [Self::Earthquake, Self::Flood, Self::Fire, Self::Wind];

    pub fn name(self) -> &'static str {
        match self {
            Self::Earthquake => "earthquake",
            Self::Flood => "flood",
            Self::Fire => "fire",
            Self::Wind => "wind",
        }
    }

    /// Measures an event of this kind can expose an asset to.
    pub fn measures(self) -> &'static [HazardMeasure] {
        match self {
            Self::Earthquake => &[
                HazardMeasure::PeakGroundAcceleration,
                HazardMeasure::PeakGroundVelocity,
            ],
            Self::Flood => &[HazardMeasure::FloodDepth, HazardMeasure::FloodVelocity],
            Self::Fire => &[HazardMeasure::FireBoundaryDistance],
            Self::Wind => &[HazardMeasure::WindSpeed],
        }
    }
}

impl fmt::Display for HazardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Hazard intensity measure a fragility curve set is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HazardMeasure {
    #[serde(rename = "peak_ground_velocity")]
    PeakGroundVelocity,
    #[serde(rename = "peak_ground_acceleration")]
    PeakGroundAcceleration,
    #[serde(rename = "wind_speed")]
    WindSpeed,
    #[serde(rename = "flood_velocity")]
    FloodVelocity,
    #[serde(rename = "flood_depth")]
    FloodDepth,
    #[serde(rename = "fire_boundary_dist")]
    FireBoundaryDistance,
}

impl HazardMeasure {
    pub const ALL: [HazardMeasure; 6] = [
        Self::PeakGroundVelocity,
        Self::PeakGroundAcceleration,
        Self::WindSpeed,
        Self::FloodVelocity,
        Self::FloodDepth,
        Self::FireBoundaryDistance,
    ];

    /// Field name on the asset state record.
    pub fn name(self) -> &'static str {
        match self {
            Self::PeakGroundVelocity => "peak_ground_velocity",
            Self::PeakGroundAcceleration => "peak_ground_acceleration",
            Self::WindSpeed => "wind_speed",
            Self::FloodVelocity => "flood_velocity",
            Self::FloodDepth => "flood_depth",
            Self::FireBoundaryDistance => "fire_boundary_dist",
        }
    }

    /// Physical dimension of values along this measure.
    pub fn dimension(self) -> Dimension {
        match self {
            Self::PeakGroundVelocity | Self::WindSpeed | Self::FloodVelocity => Dimension::Speed,
            Self::PeakGroundAcceleration => Dimension::Acceleration,
            Self::FloodDepth | Self::FireBoundaryDistance => Dimension::Length,
        }
    }
}

impl fmt::Display for HazardMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HazardMeasure {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.name() == s)
            .ok_or_else(|| format!("unknown hazard measure: {s}"))
    }
}
