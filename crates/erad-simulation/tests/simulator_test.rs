//! Exposure simulator behaviour: ordering, fallback, error collection.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};
use erad_core::config::SimulationConfig;
use erad_core::errors::{CovariateError, DistributionError, EradErrorCode, SimulationError};
use erad_core::types::{AssetType, ComponentId, HazardKind, HazardMeasure, PoleClass, PoleMaterial};
use erad_core::units::{Quantity, Unit};
use erad_fragility::{
    CurveSet, FragilityCurve, HazardFragilityCurves, PoleCovariates, ProbabilityFunction,
};
use erad_simulation::{
    Asset, AssetState, AssetSystem, HazardIntensities, HazardModel, HazardSimulator,
    HazardSystem, SurvivalAsset,
};

fn make_timestamp(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 8, 1, hour, 0, 0).unwrap()
}

fn make_assets() -> Vec<Asset> {
    vec![
        Asset::new("sub_1", AssetType::Substation, ComponentId::random()),
        Asset::new("line_1", AssetType::DistributionOverheadLines, ComponentId::random()),
        Asset::new("pole_1", AssetType::DistributionPoles, ComponentId::random()),
    ]
}

fn wind(name: &str, hour: u32, mps: f64) -> HazardModel {
    HazardModel::uniform(
        name,
        make_timestamp(hour),
        HazardKind::Wind,
        HazardIntensities::wind(Quantity::new(mps, Unit::MeterPerSecond)),
    )
    .unwrap()
}

fn quake(name: &str, hour: u32, g: f64) -> HazardModel {
    HazardModel::uniform(
        name,
        make_timestamp(hour),
        HazardKind::Earthquake,
        HazardIntensities::earthquake(Some(Quantity::new(g, Unit::StandardGravity)), None),
    )
    .unwrap()
}

/// Records which events it saw, in order.
struct Recorder {
    name: String,
    id: ComponentId,
    seen: Arc<Mutex<Vec<String>>>,
    states: Vec<AssetState>,
}

impl SurvivalAsset for Recorder {
    fn name(&self) -> &str {
        &self.name
    }

    fn asset_type(&self) -> AssetType {
        AssetType::Switch
    }

    fn backing_id(&self) -> ComponentId {
        self.id
    }

    fn states(&self) -> &[AssetState] {
        &self.states
    }

    fn update_survival_probability(
        &mut self,
        timestamp: DateTime<Utc>,
        hazard: &HazardModel,
        _curves: &CurveSet,
    ) -> Result<(), SimulationError> {
        self.seen.lock().unwrap().push(hazard.name.clone());
        self.states.push(AssetState {
            timestamp,
            intensities: hazard.exposure_for(&self.name),
            survival_probability: 1.0,
        });
        Ok(())
    }
}

#[test]
fn events_run_in_time_then_kind_then_insertion_order() {
    let mut hazards = HazardSystem::new();
    hazards
        .add_hazards([
            wind("wind_late", 9, 20.0),
            wind("wind_a", 3, 20.0),
            quake("quake_a", 3, 0.2),
            wind("wind_b", 3, 25.0),
            quake("quake_early", 1, 0.1),
        ])
        .unwrap();

    let seen = Arc::new(Mutex::new(Vec::new()));
    let recorder = Recorder {
        name: "rec".into(),
        id: ComponentId::random(),
        seen: Arc::clone(&seen),
        states: Vec::new(),
    };
    let mut sim = HazardSimulator::new(vec![recorder]);
    let report = sim.run(&hazards, "DEFAULT_CURVES");

    assert_eq!(report.data.timestamps, 3);
    assert_eq!(report.data.events, 5);
    assert_eq!(
        *seen.lock().unwrap(),
        vec!["quake_early", "quake_a", "wind_a", "wind_b", "wind_late"]
    );
    let times: Vec<_> = sim.assets()[0].states.iter().map(|s| s.timestamp).collect();
    assert!(times.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn unknown_curve_set_matches_default_and_warns() {
    let mut hazards = HazardSystem::new();
    hazards
        .add_hazards([wind("gust", 2, 60.0), quake("shake", 4, 0.6)])
        .unwrap();

    let mut by_default = HazardSimulator::new(make_assets());
    let mut by_missing = HazardSimulator::new(by_default.assets().to_vec());
    by_default.run(&hazards, "DEFAULT_CURVES");
    let report = by_missing.run(&hazards, "does_not_exist");

    assert_eq!(by_default.assets(), by_missing.assets());
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("does_not_exist"));
}

#[test]
fn configured_unknown_curve_set_falls_back_with_warning() {
    let config = SimulationConfig {
        curve_set: Some("does_not_exist".into()),
        parallel: Some(true),
    };
    let hazards = HazardSystem::wind_example();
    let mut configured = HazardSimulator::new(make_assets()).with_config(&config);
    assert_eq!(configured.curve_set(), "does_not_exist");
    let report = configured.run_configured(&hazards);

    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("does_not_exist"));
    assert_eq!(report.data.updates, 3);

    let mut by_default = HazardSimulator::new(make_assets());
    by_default.run(&hazards, "DEFAULT_CURVES");
    for (a, b) in configured.assets().iter().zip(by_default.assets()) {
        let (a, b) = (a.latest_state().unwrap(), b.latest_state().unwrap());
        assert_eq!(a.survival_probability, b.survival_probability);
    }
}

#[test]
fn default_config_runs_default_curves_cleanly() {
    let mut sim = HazardSimulator::new(make_assets()).with_config(&SimulationConfig::default());
    assert_eq!(sim.curve_set(), "DEFAULT_CURVES");
    let report = sim.run_configured(&HazardSystem::multihazard_example());
    assert!(report.is_clean());
    assert!(report.warnings.is_empty());
    // Both events share one instant, so the latest record sits there.
    let latest = sim.assets()[0].latest_state().unwrap();
    assert_eq!(latest.timestamp, sim.assets()[0].states.iter().map(|s| s.timestamp).max().unwrap());
}

#[test]
fn registered_curve_set_has_no_warning() {
    let mut hazards = HazardSystem::new();
    hazards.add_hazard(wind("gust", 2, 60.0)).unwrap();
    hazards
        .add_curves(HazardFragilityCurves::new(
            "STRICT",
            HazardMeasure::WindSpeed,
            vec![FragilityCurve::new(
                AssetType::Substation,
                ProbabilityFunction::new(
                    "norm",
                    vec![Quantity::new(10.0, Unit::MeterPerSecond).into(), 1.0.into()],
                ),
            )],
        ))
        .unwrap();

    let mut sim = HazardSimulator::new(make_assets());
    let report = sim.run(&hazards, "STRICT");
    assert!(report.warnings.is_empty());

    // 60 m/s is far above the 10 m/s median
    assert!(sim.assets()[0].states[0].survival_probability < 1e-9);
    // No curve for the other types in this set
    assert_eq!(sim.assets()[1].states[0].survival_probability, 1.0);
}

#[test]
fn failing_asset_is_reported_and_others_continue() {
    let mut hazards = HazardSystem::new();
    hazards.add_hazard(wind("gust", 2, 70.0)).unwrap();
    hazards
        .add_curves(HazardFragilityCurves::new(
            "POLES",
            HazardMeasure::WindSpeed,
            vec![
                FragilityCurve::new(
                    AssetType::DistributionPoles,
                    ProbabilityFunction::new(
                        "Darestani2019",
                        vec![Quantity::new(1.0, Unit::MeterPerSecond).into()],
                    ),
                ),
                FragilityCurve::new(
                    AssetType::Substation,
                    ProbabilityFunction::new(
                        "norm",
                        vec![Quantity::new(50.0, Unit::MeterPerSecond).into(), 5.0.into()],
                    ),
                ),
            ],
        ))
        .unwrap();

    let covariates = PoleCovariates::new(30.0, 1.5, 40.0, PoleClass::Class4, PoleMaterial::Wood);
    let mut assets = make_assets();
    assets.push(
        Asset::new("pole_2", AssetType::DistributionPoles, ComponentId::random())
            .with_pole(covariates),
    );

    let mut sim = HazardSimulator::new(assets).with_parallel(true);
    let report = sim.run(&hazards, "POLES");

    assert_eq!(report.error_count(), 1);
    match &report.errors[0] {
        SimulationError::AssetUpdate { asset, source, .. } => {
            assert_eq!(asset, "pole_1");
            assert!(matches!(
                **source,
                SimulationError::Distribution(DistributionError::Covariate(
                    CovariateError::Missing { .. }
                ))
            ));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(report.errors[0].error_code(), "ASSET_UPDATE_FAILED");
    assert_eq!(report.data.updates, 3);

    let by_name = |name: &str| sim.assets().iter().find(|a| a.name == name).unwrap();
    assert!(by_name("pole_1").states.is_empty());
    let pole = &by_name("pole_2").states[0];
    assert!(pole.survival_probability > 0.0 && pole.survival_probability < 1.0);
    assert_eq!(by_name("sub_1").states.len(), 1);
}

#[test]
fn per_asset_exposure_only_reaches_listed_assets() {
    let mut by_asset = std::collections::BTreeMap::new();
    by_asset.insert(
        "sub_1".to_string(),
        HazardIntensities::flood(Some(Quantity::new(3.0, Unit::Meter)), None),
    );
    let mut hazards = HazardSystem::new();
    hazards
        .add_hazard(
            HazardModel::per_asset("surge", make_timestamp(6), HazardKind::Flood, by_asset).unwrap(),
        )
        .unwrap();

    let mut sim = HazardSimulator::from_system(make_assets().into_iter().collect::<AssetSystem>());
    sim.run(&hazards, "DEFAULT_CURVES");

    let sub = &sim.assets()[0].states[0];
    assert!(sub.intensities.flood_depth.is_some());
    assert!(sub.survival_probability < 1.0);
    let line = &sim.assets()[1].states[0];
    assert!(line.intensities.is_empty());
    assert_eq!(line.survival_probability, 1.0);
}

#[test]
fn mph_exposure_matches_mps_exposure() {
    let mps = 40.0;
    let mph = mps * 2.236_936_292_054_402;

    let mut a = HazardSystem::new();
    a.add_hazard(wind("metric", 1, mps)).unwrap();
    let mut b = HazardSystem::new();
    b.add_hazard(
        HazardModel::uniform(
            "imperial",
            make_timestamp(1),
            HazardKind::Wind,
            HazardIntensities::wind(Quantity::new(mph, Unit::MilePerHour)),
        )
        .unwrap(),
    )
    .unwrap();

    let mut sim_a = HazardSimulator::new(make_assets());
    let mut sim_b = HazardSimulator::new(make_assets());
    sim_a.run(&a, "DEFAULT_CURVES");
    sim_b.run(&b, "DEFAULT_CURVES");
    for (x, y) in sim_a.assets().iter().zip(sim_b.assets()) {
        let (px, py) = (x.states[0].survival_probability, y.states[0].survival_probability);
        assert!((px - py).abs() < 1e-9, "{}: {px} vs {py}", x.name);
    }
}
