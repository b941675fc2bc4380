//! Fragility curves keyed by asset type, grouped per hazard measure.

use erad_core::constants::DEFAULT_CURVE_SET;
use erad_core::errors::{DistributionError, UnitError};
use erad_core::types::{AssetType, HazardMeasure};
use erad_core::units::{Quantity, Unit};
use serde::{Deserialize, Serialize};

use crate::probability::ProbabilityFunction;

/// Probability function assigned to one asset type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FragilityCurve {
    pub asset_type: AssetType,
    pub prob_function: ProbabilityFunction,
}

impl FragilityCurve {
    pub fn new(asset_type: AssetType, prob_function: ProbabilityFunction) -> Self {
        Self {
            asset_type,
            prob_function,
        }
    }

    pub fn example() -> Self {
        Self::new(AssetType::Substation, ProbabilityFunction::example())
    }
}

/// All curves of one named set along one hazard intensity measure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardFragilityCurves {
    #[serde(default = "default_set_name")]
    pub name: String,
    #[serde(alias = "asset_state_param")]
    pub measure: HazardMeasure,
    pub curves: Vec<FragilityCurve>,
}

fn default_set_name() -> String {
    DEFAULT_CURVE_SET.to_string()
}

impl HazardFragilityCurves {
    pub fn new(name: impl Into<String>, measure: HazardMeasure, curves: Vec<FragilityCurve>) -> Self {
        Self {
            name: name.into(),
            measure,
            curves,
        }
    }

    /// A single-curve peak ground acceleration collection.
    pub fn example() -> Self {
        let curve = FragilityCurve::new(
            AssetType::Substation,
            ProbabilityFunction::new(
                "lognorm",
                vec![
                    Quantity::new(0.5, Unit::MeterPerSecondSquared).into(),
                    Quantity::new(0.40 * 9.81, Unit::MeterPerSecondSquared).into(),
                    2.0.into(),
                ],
            ),
        );
        Self::new(DEFAULT_CURVE_SET, HazardMeasure::PeakGroundAcceleration, vec![curve])
    }

    /// The probability function for `asset_type`. When several curves share
    /// a type, the first one wins.
    pub fn curve_for(&self, asset_type: AssetType) -> Option<&ProbabilityFunction> {
        self.curves
            .iter()
            .find(|c| c.asset_type == asset_type)
            .map(|c| &c.prob_function)
    }

    /// Asset types without any curve in this collection.
    pub fn missing_asset_types(&self) -> Vec<AssetType> {
        AssetType::ALL
            .iter()
            .copied()
            .filter(|t| self.curve_for(*t).is_none())
            .collect()
    }

    /// Validate every curve and check its unit measures this collection's
    /// hazard quantity. Returns the asset type of the first bad curve.
    pub fn validate(&self) -> Result<(), (AssetType, DistributionError)> {
        for curve in &self.curves {
            let check = || -> Result<(), DistributionError> {
                curve.prob_function.validate()?;
                let unit = curve.prob_function.unit()?;
                if unit.dimension() != self.measure.dimension() {
                    return Err(UnitError::IncompatibleDimensions {
                        from: unit.to_string(),
                        to: self.measure.dimension().to_string(),
                    }
                    .into());
                }
                Ok(())
            };
            check().map_err(|e| (curve.asset_type, e))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_matching_curve_wins() {
        let first = ProbabilityFunction::new(
            "norm",
            vec![Quantity::new(1.0, Unit::MeterPerSecond).into(), 1.0.into()],
        );
        let second = ProbabilityFunction::new(
            "norm",
            vec![Quantity::new(9.0, Unit::MeterPerSecond).into(), 1.0.into()],
        );
        let collection = HazardFragilityCurves::new(
            "TEST",
            HazardMeasure::WindSpeed,
            vec![
                FragilityCurve::new(AssetType::Switch, first.clone()),
                FragilityCurve::new(AssetType::Switch, second),
            ],
        );
        assert_eq!(collection.curve_for(AssetType::Switch), Some(&first));
        assert!(collection.curve_for(AssetType::Substation).is_none());
        assert_eq!(collection.missing_asset_types().len(), AssetType::COUNT - 1);
    }

    #[test]
    fn test_dimension_mismatch_rejected() {
        let collection = HazardFragilityCurves::new(
            "TEST",
            HazardMeasure::FloodDepth,
            vec![FragilityCurve::example()],
        );
        let (asset_type, err) = collection.validate().unwrap_err();
        assert_eq!(asset_type, AssetType::Substation);
        assert!(matches!(err, DistributionError::IncompatibleUnits(_)));
    }

    #[test]
    fn test_example_is_valid() {
        assert!(HazardFragilityCurves::example().validate().is_ok());
    }

    #[test]
    fn test_deserialise_with_legacy_field_name() {
        let json = r#"{
            "asset_state_param": "fire_boundary_dist",
            "curves": [{
                "asset_type": "switch",
                "prob_function": {"distribution": "expon", "parameters": [{"value": 0.65, "unit": "km"}, 0.95]}
            }]
        }"#;
        let collection: HazardFragilityCurves = serde_json::from_str(json).unwrap();
        assert_eq!(collection.name, "DEFAULT_CURVES");
        assert_eq!(collection.measure, HazardMeasure::FireBoundaryDistance);
        assert!(collection.validate().is_ok());
    }

    #[test]
    fn test_unknown_asset_type_rejected_at_load() {
        let json = r#"{
            "measure": "wind_speed",
            "curves": [{
                "asset_type": "space_elevator",
                "prob_function": {"distribution": "norm", "parameters": [{"value": 1.0, "unit": "m/s"}]}
            }]
        }"#;
        assert!(serde_json::from_str::<HazardFragilityCurves>(json).is_err());
    }
}
