use chrono::{Duration, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, Criterion};

use erad_core::types::{AssetType, ComponentId, HazardKind};
use erad_core::units::{Quantity, Unit};
use erad_simulation::{
    Asset, HazardIntensities, HazardModel, HazardSimulator, HazardSystem, ScenarioGenerator,
};

/// 24 hourly wind events ramping from 20 to 66 m/s.
fn build_storm() -> HazardSystem {
    let start = Utc.with_ymd_and_hms(2024, 8, 1, 0, 0, 0).unwrap();
    let mut hazards = HazardSystem::new();
    for hour in 0..24 {
        let speed = 20.0 + 2.0 * hour as f64;
        hazards
            .add_hazard(
                HazardModel::uniform(
                    format!("storm_{hour}"),
                    start + Duration::hours(hour),
                    HazardKind::Wind,
                    HazardIntensities::wind(Quantity::new(speed, Unit::MeterPerSecond)),
                )
                .unwrap(),
            )
            .unwrap();
    }
    hazards
}

/// 1K assets cycling through every asset type.
fn build_assets() -> Vec<Asset> {
    (0..1_000)
        .map(|i| {
            let asset_type = AssetType::ALL[i % AssetType::COUNT];
            Asset::new(format!("asset_{i}"), asset_type, ComponentId::random())
        })
        .collect()
}

fn bench_exposure(c: &mut Criterion) {
    let hazards = build_storm();
    let assets = build_assets();

    c.bench_function("exposure_1k_assets_24_events", |b| {
        b.iter(|| {
            let mut sim = HazardSimulator::new(assets.clone());
            sim.run(&hazards, "DEFAULT_CURVES");
        });
    });
}

fn bench_sampling(c: &mut Criterion) {
    let mut sim = HazardSimulator::new(build_assets());
    sim.run(&build_storm(), "DEFAULT_CURVES");
    let assets = sim.into_assets();

    c.bench_function("samples_100_trials_1k_assets", |b| {
        b.iter(|| {
            ScenarioGenerator::new(&assets).with_seed(42).samples(100).unwrap();
        });
    });

    c.bench_function("samples_100_trials_1k_assets_parallel", |b| {
        b.iter(|| {
            ScenarioGenerator::new(&assets)
                .with_seed(42)
                .with_parallel(true)
                .samples(100)
                .unwrap();
        });
    });
}

criterion_group!(benches, bench_exposure, bench_sampling);
criterion_main!(benches);
