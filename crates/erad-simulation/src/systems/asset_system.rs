//! Assets of one distribution system.

use std::collections::HashSet;
use std::path::Path;

use erad_core::errors::{ConfigError, SimulationError};
use erad_core::types::AssetType;
use serde::{Deserialize, Serialize};

use crate::asset::Asset;

/// Assets keyed by unique name, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetSystem {
    assets: Vec<Asset>,
}

impl AssetSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one asset. Names are unique because per-asset hazard exposure is
    /// keyed by name.
    pub fn add(&mut self, asset: Asset) -> Result<(), SimulationError> {
        if self.get(&asset.name).is_some() {
            return Err(SimulationError::InvalidArgument {
                name: "asset".to_string(),
                reason: format!("duplicate asset name '{}'", asset.name),
            });
        }
        self.assets.push(asset);
        Ok(())
    }

    /// Add every asset, stopping at the first duplicate.
    pub fn add_all(&mut self, assets: impl IntoIterator<Item = Asset>) -> Result<(), SimulationError> {
        assets.into_iter().try_for_each(|a| self.add(a))
    }

    pub fn get(&self, name: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.name == name)
    }

    /// Assets of `asset_type` (all types when `None`) accepted by `filter`.
    pub fn get_components<'a, F>(
        &'a self,
        asset_type: Option<AssetType>,
        filter: F,
    ) -> impl Iterator<Item = &'a Asset> + 'a
    where
        F: Fn(&Asset) -> bool + 'a,
    {
        self.assets
            .iter()
            .filter(move |a| asset_type.map_or(true, |t| a.asset_type == t))
            .filter(move |a| filter(a))
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn into_assets(self) -> Vec<Asset> {
        self.assets
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Asset count per type, for types present in the system.
    pub fn type_counts(&self) -> Vec<(AssetType, usize)> {
        AssetType::ALL
            .iter()
            .map(|t| (*t, self.assets.iter().filter(|a| a.asset_type == *t).count()))
            .filter(|(_, n)| *n > 0)
            .collect()
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Parse a system, rejecting duplicate asset names.
    pub fn from_json(text: &str) -> Result<Self, SimulationError> {
        let system: Self = serde_json::from_str(text).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        let mut seen = HashSet::new();
        for asset in &system.assets {
            if !seen.insert(asset.name.as_str()) {
                return Err(SimulationError::InvalidArgument {
                    name: "asset".to_string(),
                    reason: format!("duplicate asset name '{}'", asset.name),
                });
            }
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

impl FromIterator<Asset> for AssetSystem {
    /// Later assets with an already-seen name are dropped.
    fn from_iter<I: IntoIterator<Item = Asset>>(iter: I) -> Self {
        let mut system = Self::new();
        for asset in iter {
            if system.get(&asset.name).is_none() {
                system.assets.push(asset);
            }
        }
        system
    }
}
