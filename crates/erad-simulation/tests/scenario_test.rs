//! Scenario generation end to end: exposure records to tracked changes.

use std::collections::HashSet;

use chrono::{DateTime, Duration, TimeZone, Utc};
use erad_core::config::SamplingConfig;
use erad_core::errors::SimulationError;
use erad_core::types::{AssetType, ComponentId, HazardKind};
use erad_core::units::{Quantity, Unit};
use erad_simulation::{
    Asset, AssetState, HazardIntensities, HazardModel, HazardSimulator, HazardSystem,
    ScenarioGenerator,
};

fn make_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 8, 1, 12, 0, 0).unwrap()
}

fn make_state(timestamp: DateTime<Utc>, survival_probability: f64) -> AssetState {
    AssetState {
        timestamp,
        intensities: HazardIntensities::new(),
        survival_probability,
    }
}

fn make_asset(name: &str, states: Vec<AssetState>) -> Asset {
    let mut asset = Asset::new(name, AssetType::TransformerPoleMount, ComponentId::random());
    asset.states = states;
    asset
}

/// Assets run through a storm that steps up over four hours.
fn make_exposed_assets() -> Vec<Asset> {
    let mut hazards = HazardSystem::new();
    for hour in 0..4 {
        hazards
            .add_hazard(
                HazardModel::uniform(
                    format!("storm_{hour}"),
                    make_timestamp() + Duration::hours(hour),
                    HazardKind::Wind,
                    HazardIntensities::wind(Quantity::new(
                        48.0 + 4.0 * hour as f64,
                        Unit::MeterPerSecond,
                    )),
                )
                .unwrap(),
            )
            .unwrap();
    }
    let assets = AssetType::ALL
        .iter()
        .enumerate()
        .map(|(i, t)| Asset::new(format!("asset_{i}"), *t, ComponentId::random()))
        .collect();
    let mut sim = HazardSimulator::new(assets);
    let report = sim.run(&hazards, "DEFAULT_CURVES");
    assert!(report.is_clean());
    sim.into_assets()
}

#[test]
fn certain_failures_give_one_edit_per_asset_per_trial() {
    let t = make_timestamp();
    let assets: Vec<Asset> = (0..3)
        .map(|i| make_asset(&format!("a{i}"), vec![make_state(t, 0.0)]))
        .collect();

    let changes = ScenarioGenerator::new(&assets).with_seed(42).samples(2).unwrap();

    for trial in ["sample_0", "sample_1"] {
        let edits: Vec<_> = changes
            .iter()
            .filter(|c| c.scenario_name == trial)
            .flat_map(|c| {
                assert_eq!(c.timestamp, t);
                c.edits.iter()
            })
            .collect();
        assert_eq!(edits.len(), 3, "{trial}");
        for (edit, asset) in edits.iter().zip(&assets) {
            assert_eq!(edit.component_id, asset.backing_id);
            assert_eq!(edit.name, "in_service");
            assert!(!edit.value);
        }
    }
}

#[test]
fn same_seed_same_changes() {
    let assets = make_exposed_assets();
    let a = ScenarioGenerator::new(&assets).with_seed(7).samples(25).unwrap();
    let b = ScenarioGenerator::new(&assets).with_seed(7).samples(25).unwrap();
    assert_eq!(a, b);
    assert!(!a.is_empty(), "a 60 m/s storm should fail something");
}

#[test]
fn parallel_trials_match_sequential() {
    let assets = make_exposed_assets();
    let seq = ScenarioGenerator::new(&assets).with_seed(5).samples(16).unwrap();
    let par = ScenarioGenerator::new(&assets)
        .with_seed(5)
        .with_parallel(true)
        .samples(16)
        .unwrap();
    assert_eq!(seq, par);
}

#[test]
fn trial_is_independent_of_trial_count() {
    let assets = make_exposed_assets();
    let few = ScenarioGenerator::new(&assets).with_seed(1).samples(3).unwrap();
    let many = ScenarioGenerator::new(&assets).with_seed(1).samples(30).unwrap();
    let prefix: Vec<_> = many
        .iter()
        .filter(|c| ["sample_0", "sample_1", "sample_2"].contains(&c.scenario_name.as_str()))
        .cloned()
        .collect();
    assert_eq!(few, prefix);
}

#[test]
fn at_most_one_outage_per_asset_per_trial() {
    let assets = make_exposed_assets();
    let changes = ScenarioGenerator::new(&assets).with_seed(99).samples(50).unwrap();
    let mut seen = HashSet::new();
    for change in &changes {
        for id in change.outaged_components() {
            assert!(
                seen.insert((change.scenario_name.clone(), id)),
                "{id} failed twice in {}",
                change.scenario_name
            );
        }
    }
}

#[test]
fn output_is_ordered_by_trial_then_time() {
    let assets = make_exposed_assets();
    let changes = ScenarioGenerator::new(&assets).with_seed(3).samples(20).unwrap();
    let keys: Vec<(u32, DateTime<Utc>)> = changes
        .iter()
        .map(|c| {
            let trial = c.scenario_name.trim_start_matches("sample_").parse().unwrap();
            (trial, c.timestamp)
        })
        .collect();
    assert!(keys.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn empty_states_give_no_changes() {
    let assets = vec![make_asset("idle", Vec::new())];
    let changes = ScenarioGenerator::new(&assets).samples(10).unwrap();
    assert!(changes.is_empty());
}

#[test]
fn zero_trials_is_an_invalid_argument() {
    let assets = vec![make_asset("idle", Vec::new())];
    match ScenarioGenerator::new(&assets).samples(0) {
        Err(SimulationError::InvalidArgument { name, .. }) => {
            assert_eq!(name, "number_of_samples")
        }
        other => panic!("expected invalid argument, got {other:?}"),
    }
}

#[test]
fn config_supplies_seed() {
    let assets = make_exposed_assets();
    let config = SamplingConfig {
        seed: Some(17),
        ..SamplingConfig::default()
    };
    let from_config = ScenarioGenerator::new(&assets).with_config(&config);
    assert_eq!(from_config.seed(), 17);
    assert_eq!(
        from_config.samples(5).unwrap(),
        ScenarioGenerator::new(&assets).with_seed(17).samples(5).unwrap()
    );
}
