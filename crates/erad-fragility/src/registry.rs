//! Named fragility curve sets and resolution with default fallback.

use std::path::Path;

use erad_core::constants::DEFAULT_CURVE_SET;
use erad_core::errors::ConfigError;
use erad_core::types::{AssetType, HazardMeasure};
use serde::{Deserialize, Serialize};

use crate::curves::HazardFragilityCurves;
use crate::defaults::DEFAULT_CURVES;
use crate::probability::ProbabilityFunction;

/// Every collection of one named curve set, one per hazard measure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSet {
    pub name: String,
    #[serde(default)]
    pub collections: Vec<HazardFragilityCurves>,
}

impl CurveSet {
    /// Collections are renamed to `name`.
    pub fn new(name: impl Into<String>, collections: Vec<HazardFragilityCurves>) -> Self {
        let mut set = Self {
            name: name.into(),
            collections,
        };
        set.normalize_names();
        set
    }

    fn normalize_names(&mut self) {
        for collection in &mut self.collections {
            collection.name.clone_from(&self.name);
        }
    }

    /// First collection along `measure`.
    pub fn collection(&self, measure: HazardMeasure) -> Option<&HazardFragilityCurves> {
        self.collections.iter().find(|c| c.measure == measure)
    }

    /// Probability function for `asset_type` along `measure`.
    pub fn lookup(
        &self,
        measure: HazardMeasure,
        asset_type: AssetType,
    ) -> Option<&ProbabilityFunction> {
        self.collection(measure)?.curve_for(asset_type)
    }

    /// Validate every curve of every collection.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for collection in &self.collections {
            collection
                .validate()
                .map_err(|(asset_type, e)| ConfigError::InvalidValue {
                    field: format!("{}.{}.{}", self.name, collection.measure, asset_type),
                    message: e.to_string(),
                })?;
        }
        Ok(())
    }
}

/// Outcome of resolving a curve set name.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedCurves<'a> {
    pub set: &'a CurveSet,
    /// True when the requested name had no collections and the built-in
    /// default set was substituted.
    pub fallback: bool,
}

impl ResolvedCurves<'_> {
    /// Warning text for a fallback resolution.
    pub fn warning(&self, requested: &str) -> Option<String> {
        self.fallback.then(|| {
            format!(
                "No HazardFragilityCurves named '{requested}' found; using {DEFAULT_CURVE_SET}"
            )
        })
    }
}

/// The curve sets known to a hazard system.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurveRegistry {
    sets: Vec<CurveSet>,
}

impl CurveRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one collection to the set it names, creating the set if needed.
    pub fn add_collection(&mut self, collection: HazardFragilityCurves) {
        match self.sets.iter_mut().find(|s| s.name == collection.name) {
            Some(set) => set.collections.push(collection),
            None => self
                .sets
                .push(CurveSet::new(collection.name.clone(), vec![collection])),
        }
    }

    /// Add every collection of `set`; collections keep insertion order.
    pub fn add_set(&mut self, set: CurveSet) {
        for collection in set.collections {
            self.add_collection(HazardFragilityCurves {
                name: set.name.clone(),
                ..collection
            });
        }
    }

    pub fn get(&self, name: &str) -> Option<&CurveSet> {
        self.sets.iter().find(|s| s.name == name)
    }

    pub fn sets(&self) -> &[CurveSet] {
        &self.sets
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sets.iter().map(|s| s.name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// All collections across every set, in insertion order.
    pub fn collections(&self) -> impl Iterator<Item = &HazardFragilityCurves> {
        self.sets.iter().flat_map(|s| s.collections.iter())
    }

    /// Resolve `name`, falling back to [`DEFAULT_CURVES`] with a warning when
    /// no collection carries that name.
    pub fn resolve(&self, name: &str) -> ResolvedCurves<'_> {
        match self.get(name) {
            Some(set) if !set.collections.is_empty() => ResolvedCurves {
                set,
                fallback: false,
            },
            _ => {
                tracing::warn!(
                    curve_set = name,
                    "no fragility curves found under this name, using default curves"
                );
                ResolvedCurves {
                    set: &DEFAULT_CURVES,
                    fallback: true,
                }
            }
        }
    }

    /// Load and validate curve sets from a TOML document, then add them.
    pub fn extend_from_toml(&mut self, text: &str) -> Result<usize, ConfigError> {
        let sets = load_curve_sets_toml(text)?;
        let count = sets.len();
        for set in sets {
            self.add_set(set);
        }
        Ok(count)
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct CurveSetsDocument {
    #[serde(default)]
    curve_sets: Vec<CurveSet>,
}

fn finish_loading(path: &str, doc: CurveSetsDocument) -> Result<Vec<CurveSet>, ConfigError> {
    let mut sets = doc.curve_sets;
    for set in &mut sets {
        if set.name.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: format!("{path}: curve_sets.name"),
                message: "must not be empty".to_string(),
            });
        }
        set.normalize_names();
        set.validate()?;
    }
    tracing::debug!(path, count = sets.len(), "loaded fragility curve sets");
    Ok(sets)
}

/// Parse `[[curve_sets]]` tables from TOML.
///
/// ```toml
/// [[curve_sets]]
/// name = "COASTAL"
///
/// [[curve_sets.collections]]
/// measure = "wind_speed"
///
/// [[curve_sets.collections.curves]]
/// asset_type = "distribution_poles"
/// prob_function = { distribution = "lognorm", parameters = [
///     { value = 0.4, unit = "m/s" }, { value = 40.0, unit = "m/s" }, 2.5,
/// ] }
/// ```
///
/// Unknown asset types, measures or units fail to parse; curves that parse
/// but do not build fail validation.
pub fn load_curve_sets_toml(text: &str) -> Result<Vec<CurveSet>, ConfigError> {
    let doc: CurveSetsDocument = toml::from_str(text).map_err(|e| ConfigError::ParseError {
        path: "<string>".to_string(),
        message: e.to_string(),
    })?;
    finish_loading("<string>", doc)
}

/// Parse curve sets from a JSON document with the same shape.
pub fn load_curve_sets_json(text: &str) -> Result<Vec<CurveSet>, ConfigError> {
    let doc: CurveSetsDocument =
        serde_json::from_str(text).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
    finish_loading("<string>", doc)
}

/// Load curve sets from a `.toml` or `.json` file.
pub fn load_curve_sets_file(path: &Path) -> Result<Vec<CurveSet>, ConfigError> {
    let display = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: display.clone(),
    })?;
    let is_json = path.extension().is_some_and(|ext| ext == "json");
    let doc: CurveSetsDocument = if is_json {
        serde_json::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: display.clone(),
            message: e.to_string(),
        })?
    } else {
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: display.clone(),
            message: e.to_string(),
        })?
    };
    finish_loading(&display, doc)
}

/// Serialize curve sets in the `[[curve_sets]]` layout.
pub fn curve_sets_to_toml(sets: &[CurveSet]) -> Result<String, ConfigError> {
    let doc = CurveSetsDocument {
        curve_sets: sets.to_vec(),
    };
    toml::to_string_pretty(&doc).map_err(|e| ConfigError::ParseError {
        path: "<serialization>".to_string(),
        message: e.to_string(),
    })
}
