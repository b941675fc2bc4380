//! Hazard events and fragility curve sets of one study.

use std::path::Path;

use chrono::{DateTime, Utc};
use erad_core::errors::{ConfigError, SimulationError};
use erad_core::types::HazardKind;
use erad_fragility::{CurveRegistry, CurveSet, HazardFragilityCurves, DEFAULT_CURVES};
use serde::{Deserialize, Serialize};

use crate::hazards::HazardModel;

/// Hazard events plus the curve sets they are evaluated against.
#[derive(Debug, Clone, Default)]
pub struct HazardSystem {
    hazards: Vec<HazardModel>,
    curves: CurveRegistry,
}

#[derive(Serialize, Deserialize)]
struct HazardSystemDocument {
    #[serde(default)]
    hazards: Vec<HazardModel>,
    #[serde(default)]
    curve_sets: Vec<CurveSet>,
}

impl HazardSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_hazard(&mut self, hazard: HazardModel) -> Result<(), SimulationError> {
        hazard.validate()?;
        self.hazards.push(hazard);
        Ok(())
    }

    pub fn add_hazards(
        &mut self,
        hazards: impl IntoIterator<Item = HazardModel>,
    ) -> Result<(), SimulationError> {
        hazards.into_iter().try_for_each(|h| self.add_hazard(h))
    }

    /// Register a curve collection under its own set name.
    pub fn add_curves(&mut self, collection: HazardFragilityCurves) -> Result<(), SimulationError> {
        let name = collection.name.clone();
        CurveSet::new(name, vec![collection.clone()]).validate()?;
        self.curves.add_collection(collection);
        Ok(())
    }

    pub fn add_curve_set(&mut self, set: CurveSet) -> Result<(), SimulationError> {
        set.validate()?;
        self.curves.add_set(set);
        Ok(())
    }

    pub fn hazards(&self) -> &[HazardModel] {
        &self.hazards
    }

    pub fn hazards_of(&self, kind: HazardKind) -> impl Iterator<Item = &HazardModel> {
        self.hazards.iter().filter(move |h| h.kind == kind)
    }

    pub fn curves(&self) -> &CurveRegistry {
        &self.curves
    }

    /// Distinct event timestamps, ascending.
    pub fn timestamps(&self) -> Vec<DateTime<Utc>> {
        let mut timestamps: Vec<_> = self.hazards.iter().map(|h| h.timestamp).collect();
        timestamps.sort_unstable();
        timestamps.dedup();
        timestamps
    }

    /// Events at `timestamp`, earthquake then flood then fire then wind, and
    /// insertion order within a kind.
    pub fn events_at(&self, timestamp: DateTime<Utc>) -> Vec<&HazardModel> {
        HazardKind::ALL
            .into_iter()
            .flat_map(|kind| {
                self.hazards
                    .iter()
                    .filter(move |h| h.kind == kind && h.timestamp == timestamp)
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.hazards.is_empty()
    }

    fn single(hazards: impl IntoIterator<Item = HazardModel>) -> Self {
        Self {
            hazards: hazards.into_iter().collect(),
            curves: CurveRegistry::new(),
        }
    }

    pub fn earthquake_example() -> Self {
        Self::single([HazardModel::example(HazardKind::Earthquake)])
    }

    pub fn flood_example() -> Self {
        Self::single([HazardModel::example(HazardKind::Flood)])
    }

    pub fn fire_example() -> Self {
        Self::single([HazardModel::example(HazardKind::Fire)])
    }

    pub fn wind_example() -> Self {
        Self::single([HazardModel::example(HazardKind::Wind)])
    }

    /// Wind and flood at the same instant.
    pub fn multihazard_example() -> Self {
        Self::single([
            HazardModel::example(HazardKind::Wind),
            HazardModel::example(HazardKind::Flood),
        ])
    }

    /// Serialize hazards and curve sets. A system without curves is written
    /// with the default set so the file is self-contained.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        let curve_sets = if self.curves.is_empty() {
            vec![DEFAULT_CURVES.clone()]
        } else {
            self.curves.sets().to_vec()
        };
        let doc = HazardSystemDocument {
            hazards: self.hazards.clone(),
            curve_sets,
        };
        serde_json::to_string_pretty(&doc).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Parse and validate a system written by [`Self::to_json`].
    pub fn from_json(text: &str) -> Result<Self, SimulationError> {
        let doc: HazardSystemDocument =
            serde_json::from_str(text).map_err(|e| ConfigError::ParseError {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        let mut system = Self::new();
        system.add_hazards(doc.hazards)?;
        for set in doc.curve_sets {
            system.add_curve_set(CurveSet::new(set.name, set.collections))?;
        }
        Ok(system)
    }

    pub fn to_json_file(&self, path: &Path) -> Result<(), ConfigError> {
        let text = self.to_json()?;
        std::fs::write(path, text).map_err(|e| ConfigError::WriteFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    pub fn from_json_file(path: &Path) -> Result<Self, SimulationError> {
        let text = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        Self::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_events_at_follow_kind_order() {
        let system = HazardSystem::multihazard_example();
        let ts = system.timestamps();
        assert_eq!(ts.len(), 1);
        let kinds: Vec<_> = system.events_at(ts[0]).iter().map(|h| h.kind).collect();
        assert_eq!(kinds, vec![HazardKind::Flood, HazardKind::Wind]);
    }

    #[test]
    fn test_timestamps_are_distinct_and_sorted() {
        let mut system = HazardSystem::new();
        let late = HazardModel::example(HazardKind::Wind);
        let mut early = HazardModel::example(HazardKind::Fire);
        early.timestamp = late.timestamp - Duration::hours(2);
        let mut again = HazardModel::example(HazardKind::Earthquake);
        again.timestamp = late.timestamp;
        system.add_hazards([late.clone(), early.clone(), again]).unwrap();
        assert_eq!(system.timestamps(), vec![early.timestamp, late.timestamp]);
        assert_eq!(system.hazards_of(HazardKind::Wind).count(), 1);
    }

    #[test]
    fn test_json_round_trip_writes_default_curves() {
        let system = HazardSystem::wind_example();
        let text = system.to_json().unwrap();
        let back = HazardSystem::from_json(&text).unwrap();
        assert_eq!(back.hazards(), system.hazards());
        assert_eq!(back.curves().names().collect::<Vec<_>>(), vec!["DEFAULT_CURVES"]);
    }
}
