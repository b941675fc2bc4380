//! Built-in `DEFAULT_CURVES` fragility set.
//!
//! Six measures, each with one curve for every asset type. Ground motion,
//! wind and flood curves are `lognorm(s, loc, scale)`; fire boundary distance
//! curves are `expon(loc, scale)` with `loc` in km.

use std::sync::LazyLock;

use erad_core::constants::DEFAULT_CURVE_SET;
use erad_core::types::{AssetType, HazardMeasure};
use erad_core::units::{Quantity, Unit};

use crate::curves::{FragilityCurve, HazardFragilityCurves};
use crate::probability::ProbabilityFunction;
use crate::registry::CurveSet;

/// Gravitational acceleration the acceleration medians were tabulated with.
const G: f64 = 9.81;

// (asset type, s, loc, scale)
const PEAK_GROUND_VELOCITY: [(AssetType, f64, f64, f64); 14] = [
    (AssetType::Switch, 0.5, 35.0, 2.0),
    (AssetType::BatteryStorage, 0.5, 35.0, 2.0),
    (AssetType::DistributionJunctionBox, 0.5, 35.0, 2.0),
    (AssetType::DistributionOverheadLines, 0.5, 40.0, 2.0),
    (AssetType::DistributionPoles, 0.5, 40.0, 2.0),
    (AssetType::DistributionUndergroundCables, 0.5, 60.0, 2.0),
    (AssetType::SolarPanels, 0.5, 35.0, 2.0),
    (AssetType::Substation, 0.5, 50.0, 2.0),
    (AssetType::TransformerMadMount, 0.5, 35.0, 2.0),
    (AssetType::TransformerPoleMount, 0.5, 40.0, 2.0),
    (AssetType::TransmissionJunctionBox, 0.5, 50.0, 2.0),
    (AssetType::TransmissionOverheadLines, 0.5, 45.0, 2.0),
    (AssetType::TransmissionTower, 0.5, 35.0, 2.0),
    (AssetType::TransmissionUndergroundCables, 0.55, 65.0, 1.0 / 0.55),
];

const PEAK_GROUND_ACCELERATION: [(AssetType, f64, f64, f64); 14] = [
    (AssetType::Switch, 0.8, 0.4 * G, 1.0 / 0.8),
    (AssetType::BatteryStorage, 0.8, 0.4 * G, 1.0 / 0.8),
    (AssetType::DistributionJunctionBox, 0.5, 0.45 * G, 1.0 / 0.5),
    (AssetType::DistributionOverheadLines, 0.55, 0.5 * G, 1.0 / 0.55),
    (AssetType::DistributionPoles, 0.6, 0.4 * G, 1.0 / 0.6),
    (AssetType::DistributionUndergroundCables, 0.8, 1.0 * G, 1.0 / 0.8),
    (AssetType::SolarPanels, 0.45, 0.45 * G, 1.0 / 0.45),
    (AssetType::Substation, 0.5, 0.4 * G, 1.0 / 0.5),
    (AssetType::TransformerMadMount, 0.6, 0.4 * G, 1.0 / 0.6),
    (AssetType::TransformerPoleMount, 0.8, 0.5 * G, 1.0 / 0.7),
    (AssetType::TransmissionJunctionBox, 0.5, 0.5 * G, 1.0 / 0.5),
    (AssetType::TransmissionOverheadLines, 0.6, 0.6 * G, 1.0 / 0.6),
    (AssetType::TransmissionTower, 0.4, 0.35 * G, 1.0 / 0.4),
    (AssetType::TransmissionUndergroundCables, 0.55, 0.8 * G, 1.0 / 0.55),
];

const WIND_SPEED: [(AssetType, f64, f64, f64); 14] = [
    (AssetType::Switch, 0.45, 50.0, 1.0 / 0.45),
    (AssetType::BatteryStorage, 0.45, 50.0, 1.0 / 0.45),
    (AssetType::DistributionJunctionBox, 0.4, 50.0, 1.0 / 0.4),
    (AssetType::DistributionOverheadLines, 0.35, 45.0, 1.0 / 0.35),
    (AssetType::DistributionPoles, 0.4, 45.0, 1.0 / 0.4),
    (AssetType::DistributionUndergroundCables, 0.4, 55.0, 1.0 / 0.4),
    (AssetType::SolarPanels, 0.3, 55.0, 1.0 / 0.3),
    (AssetType::Substation, 0.4, 55.0, 1.0 / 0.4),
    (AssetType::TransformerMadMount, 0.35, 50.0, 1.0 / 0.35),
    (AssetType::TransformerPoleMount, 0.3, 45.0, 1.0 / 0.3),
    (AssetType::TransmissionJunctionBox, 0.54, 55.0, 1.0 / 0.54),
    (AssetType::TransmissionOverheadLines, 0.35, 50.0, 1.0 / 0.35),
    (AssetType::TransmissionTower, 0.4, 55.0, 1.0 / 0.4),
    (AssetType::TransmissionUndergroundCables, 0.4, 60.0, 1.0 / 0.4),
];

const FLOOD_VELOCITY: [(AssetType, f64, f64, f64); 14] = [
    (AssetType::Switch, 0.35, 1.5, 1.0 / 0.35),
    (AssetType::BatteryStorage, 0.35, 1.5, 1.0 / 0.35),
    (AssetType::DistributionJunctionBox, 0.4, 2.0, 1.0 / 0.4),
    (AssetType::DistributionOverheadLines, 0.35, 3.5, 1.0 / 0.35),
    (AssetType::DistributionPoles, 0.35, 3.0, 1.0 / 0.35),
    (AssetType::DistributionUndergroundCables, 0.4, 2.0, 1.0 / 0.4),
    (AssetType::SolarPanels, 0.35, 2.0, 1.0 / 0.35),
    (AssetType::Substation, 0.4, 2.0, 1.0 / 0.4),
    (AssetType::TransformerMadMount, 0.35, 1.5, 1.0 / 0.35),
    (AssetType::TransformerPoleMount, 0.3, 2.5, 1.0 / 0.3),
    (AssetType::TransmissionJunctionBox, 0.4, 1.5, 1.0 / 0.4),
    (AssetType::TransmissionOverheadLines, 0.35, 3.5, 1.0 / 0.35),
    (AssetType::TransmissionTower, 0.4, 3.0, 1.0 / 0.4),
    (AssetType::TransmissionUndergroundCables, 0.4, 2.0, 1.0 / 0.4),
];

const FLOOD_DEPTH: [(AssetType, f64, f64, f64); 14] = [
    (AssetType::Switch, 0.35, 0.5, 1.0 / 0.35),
    (AssetType::BatteryStorage, 0.35, 0.5, 1.0 / 0.35),
    (AssetType::DistributionJunctionBox, 0.4, 1.0, 1.0 / 0.4),
    (AssetType::DistributionOverheadLines, 0.35, 1.0, 1.0 / 0.35),
    (AssetType::DistributionPoles, 0.35, 1.0, 1.0 / 0.35),
    (AssetType::DistributionUndergroundCables, 0.8, 1.0, 1.0 / 0.8),
    (AssetType::SolarPanels, 0.35, 0.6, 1.0 / 0.35),
    (AssetType::Substation, 0.4, 1.0, 1.0 / 0.4),
    (AssetType::TransformerMadMount, 0.35, 0.6, 1.0 / 0.35),
    (AssetType::TransformerPoleMount, 0.3, 0.8, 1.0 / 0.3),
    (AssetType::TransmissionJunctionBox, 0.4, 1.0, 1.0 / 0.4),
    (AssetType::TransmissionOverheadLines, 0.3, 1.8, 1.0 / 0.3),
    (AssetType::TransmissionTower, 0.4, 2.2, 1.0 / 0.4),
    (AssetType::TransmissionUndergroundCables, 0.25, 0.8, 1.0 / 0.25),
];

// (asset type, loc, scale)
const FIRE_BOUNDARY_DISTANCE: [(AssetType, f64, f64); 14] = [
    (AssetType::Switch, 0.65, 0.95),
    (AssetType::BatteryStorage, 0.65, 0.95),
    (AssetType::DistributionJunctionBox, 0.5, 0.95),
    (AssetType::DistributionOverheadLines, 0.5, 0.95),
    (AssetType::DistributionPoles, 1.0, 0.95),
    (AssetType::DistributionUndergroundCables, 0.1, 0.95),
    (AssetType::SolarPanels, 0.55, 0.95),
    (AssetType::Substation, 0.7, 0.95),
    (AssetType::TransformerMadMount, 0.9, 0.95),
    (AssetType::TransformerPoleMount, 1.0, 0.95),
    (AssetType::TransmissionJunctionBox, 0.55, 0.95),
    (AssetType::TransmissionOverheadLines, 1.1, 0.95),
    (AssetType::TransmissionTower, 0.7, 0.95),
    (AssetType::TransmissionUndergroundCables, 0.15, 0.95),
];

/// The process-wide default curve set, built on first use.
pub static DEFAULT_CURVES: LazyLock<CurveSet> = LazyLock::new(build_default_curves);

fn lognorm_collection(
    measure: HazardMeasure,
    unit: Unit,
    rows: &[(AssetType, f64, f64, f64)],
) -> HazardFragilityCurves {
    let curves = rows
        .iter()
        .map(|&(asset_type, s, loc, scale)| {
            FragilityCurve::new(
                asset_type,
                ProbabilityFunction::new(
                    "lognorm",
                    vec![
                        Quantity::new(s, unit).into(),
                        Quantity::new(loc, unit).into(),
                        scale.into(),
                    ],
                ),
            )
        })
        .collect();
    HazardFragilityCurves::new(DEFAULT_CURVE_SET, measure, curves)
}

fn expon_collection(
    measure: HazardMeasure,
    unit: Unit,
    rows: &[(AssetType, f64, f64)],
) -> HazardFragilityCurves {
    let curves = rows
        .iter()
        .map(|&(asset_type, loc, scale)| {
            FragilityCurve::new(
                asset_type,
                ProbabilityFunction::new(
                    "expon",
                    vec![Quantity::new(loc, unit).into(), scale.into()],
                ),
            )
        })
        .collect();
    HazardFragilityCurves::new(DEFAULT_CURVE_SET, measure, curves)
}

fn build_default_curves() -> CurveSet {
    tracing::debug!("building default fragility curves");
    CurveSet::new(
        DEFAULT_CURVE_SET,
        vec![
            lognorm_collection(
                HazardMeasure::PeakGroundVelocity,
                Unit::CentimeterPerSecond,
                &PEAK_GROUND_VELOCITY,
            ),
            lognorm_collection(
                HazardMeasure::PeakGroundAcceleration,
                Unit::MeterPerSecondSquared,
                &PEAK_GROUND_ACCELERATION,
            ),
            lognorm_collection(HazardMeasure::WindSpeed, Unit::MeterPerSecond, &WIND_SPEED),
            lognorm_collection(
                HazardMeasure::FloodVelocity,
                Unit::MeterPerSecond,
                &FLOOD_VELOCITY,
            ),
            lognorm_collection(HazardMeasure::FloodDepth, Unit::Meter, &FLOOD_DEPTH),
            expon_collection(
                HazardMeasure::FireBoundaryDistance,
                Unit::Kilometer,
                &FIRE_BOUNDARY_DISTANCE,
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_measure_covers_every_asset_type() {
        for measure in HazardMeasure::ALL {
            let collection = DEFAULT_CURVES
                .collection(measure)
                .unwrap_or_else(|| panic!("no default collection for {measure}"));
            assert!(collection.missing_asset_types().is_empty(), "{measure}");
        }
    }

    #[test]
    fn test_every_default_curve_is_valid() {
        assert!(DEFAULT_CURVES.validate().is_ok());
    }

    #[test]
    fn test_default_set_name() {
        assert_eq!(DEFAULT_CURVES.name, "DEFAULT_CURVES");
    }

    #[test]
    fn test_fire_curve_zero_inside_loc() {
        let f = DEFAULT_CURVES
            .lookup(HazardMeasure::FireBoundaryDistance, AssetType::DistributionPoles)
            .unwrap();
        let p = f.probability(&Quantity::new(0.5, Unit::Kilometer)).unwrap();
        assert_eq!(p, 0.0);
        let p = f.probability(&Quantity::new(5.0, Unit::Kilometer)).unwrap();
        assert!(p > 0.9);
    }

    #[test]
    fn test_wind_curve_accepts_mph() {
        let f = DEFAULT_CURVES
            .lookup(HazardMeasure::WindSpeed, AssetType::DistributionPoles)
            .unwrap();
        let metric = f.probability(&Quantity::new(60.0, Unit::MeterPerSecond)).unwrap();
        let imperial = f
            .probability(&Quantity::new(60.0 / 0.44704, Unit::MilePerHour))
            .unwrap();
        assert!((metric - imperial).abs() < 1e-9);
    }
}
