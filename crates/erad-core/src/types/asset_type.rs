//! Closed enumeration of infrastructure asset categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Infrastructure asset category. Fragility curves are assigned per type.
///
/// Discriminants are stable and match the numeric codes used in exported
/// asset tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    Substation = 0,
    SolarPanels = 1,
    DistributionUndergroundCables = 2,
    TransmissionUndergroundCables = 3,
    BatteryStorage = 4,
    TransmissionTower = 5,
    DistributionPoles = 6,
    TransmissionOverheadLines = 7,
    DistributionOverheadLines = 8,
    TransformerMadMount = 9,
    TransformerPoleMount = 10,
    TransmissionJunctionBox = 11,
    DistributionJunctionBox = 12,
    Switch = 13,
}

impl AssetType {
    pub const COUNT: usize = 14;

    pub const ALL: [AssetType; Self::COUNT] = [
        Self::Substation,
        Self::SolarPanels,
        Self::DistributionUndergroundCables,
        Self::TransmissionUndergroundCables,
        Self::BatteryStorage,
        Self::TransmissionTower,
        Self::DistributionPoles,
        Self::TransmissionOverheadLines,
        Self::DistributionOverheadLines,
        Self::TransformerMadMount,
        Self::TransformerPoleMount,
        Self::TransmissionJunctionBox,
        Self::DistributionJunctionBox,
        Self::Switch,
    ];

    /// Numeric code.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Look up a type by numeric code.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Substation => "substation",
            Self::SolarPanels => "solar_panels",
            Self::DistributionUndergroundCables => "distribution_underground_cables",
            Self::TransmissionUndergroundCables => "transmission_underground_cables",
            Self::BatteryStorage => "battery_storage",
            Self::TransmissionTower => "transmission_tower",
            Self::DistributionPoles => "distribution_poles",
            Self::TransmissionOverheadLines => "transmission_overhead_lines",
            Self::DistributionOverheadLines => "distribution_overhead_lines",
            Self::TransformerMadMount => "transformer_mad_mount",
            Self::TransformerPoleMount => "transformer_pole_mount",
            Self::TransmissionJunctionBox => "transmission_junction_box",
            Self::DistributionJunctionBox => "distribution_junction_box",
            Self::Switch => "switch",
        }
    }

    /// Point-like assets that sit on a bus rather than spanning two.
    pub fn is_node(self) -> bool {
        matches!(
            self,
            Self::TransmissionTower
                | Self::DistributionPoles
                | Self::TransmissionJunctionBox
                | Self::DistributionJunctionBox
        )
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AssetType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.name() == s)
            .ok_or_else(|| format!("unknown asset type: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_positions() {
        for (i, t) in AssetType::ALL.iter().enumerate() {
            assert_eq!(t.code() as usize, i);
            assert_eq!(AssetType::from_code(i as u8), Some(*t));
        }
        assert_eq!(AssetType::from_code(14), None);
    }

    #[test]
    fn test_name_round_trip() {
        for t in AssetType::ALL {
            assert_eq!(t.name().parse::<AssetType>().unwrap(), t);
        }
        assert!("nuclear_reactor".parse::<AssetType>().is_err());
    }
}
