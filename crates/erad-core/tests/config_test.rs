//! Tests for the ERAD configuration system.

use std::sync::Mutex;

use erad_core::config::{EradConfig, RunOverrides};
use erad_core::errors::ConfigError;

/// Serializes tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

const ERAD_ENV_VARS: [&str; 4] = [
    "ERAD_SIMULATION_CURVE_SET",
    "ERAD_SIMULATION_PARALLEL",
    "ERAD_SAMPLING_NUMBER_OF_SAMPLES",
    "ERAD_SAMPLING_SEED",
];

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear ERAD_ env vars and point HOME at an empty directory so the
/// developer's own `~/.erad/config.toml` never leaks into a test.
fn isolate_env(home: &std::path::Path) {
    for key in ERAD_ENV_VARS {
        std::env::remove_var(key);
    }
    std::env::set_var("HOME", home);
}

#[test]
fn layered_resolution_prefers_overrides_then_env_then_project() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    std::fs::write(
        dir.path().join("erad.toml"),
        r#"
[simulation]
curve_set = "PROJECT_CURVES"

[sampling]
number_of_samples = 10
seed = 1
"#,
    )
    .unwrap();

    std::env::set_var("ERAD_SAMPLING_NUMBER_OF_SAMPLES", "25");

    let overrides = RunOverrides {
        seed: Some(99),
        ..Default::default()
    };
    let config = EradConfig::load(dir.path(), Some(&overrides)).unwrap();

    assert_eq!(config.simulation.effective_curve_set(), "PROJECT_CURVES");
    assert_eq!(config.sampling.effective_number_of_samples(), 25);
    assert_eq!(config.sampling.effective_seed(), 99);

    isolate_env(home.path());
}

#[test]
fn user_config_is_lowest_file_layer() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    std::fs::create_dir_all(home.path().join(".erad")).unwrap();
    std::fs::write(
        home.path().join(".erad").join("config.toml"),
        "[sampling]\nseed = 5\nnumber_of_samples = 3\n",
    )
    .unwrap();

    let dir = tempdir();
    std::fs::write(dir.path().join("erad.toml"), "[sampling]\nseed = 6\n").unwrap();

    let config = EradConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.sampling.effective_seed(), 6);
    assert_eq!(config.sampling.effective_number_of_samples(), 3);
}

#[test]
fn missing_files_fall_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    let config = EradConfig::load(dir.path(), None).unwrap();
    assert_eq!(config, EradConfig::default());
    assert_eq!(config.simulation.effective_curve_set(), "DEFAULT_CURVES");
}

#[test]
fn invalid_project_toml_is_a_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    std::fs::write(dir.path().join("erad.toml"), "[sampling\nseed = ").unwrap();

    let err = EradConfig::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn unparseable_env_var_is_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());
    std::env::set_var("ERAD_SAMPLING_SEED", "not-a-number");

    let dir = tempdir();
    let err = EradConfig::load(dir.path(), None).unwrap_err();
    assert!(
        matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "ERAD_SAMPLING_SEED")
    );

    isolate_env(home.path());
}

#[test]
fn zero_samples_fail_validation() {
    let config = EradConfig::from_toml("[sampling]\nnumber_of_samples = 0\n").unwrap();
    let err = EradConfig::validate(&config).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn unknown_keys_are_ignored() {
    let config = EradConfig::from_toml("[sampling]\nseed = 3\ncolour = \"blue\"\n").unwrap();
    assert_eq!(config.sampling.seed, Some(3));
}

#[test]
fn toml_round_trip_preserves_values() {
    let config = EradConfig::from_toml(
        "[simulation]\ncurve_set = \"X\"\nparallel = true\n[sampling]\nseed = 11\n",
    )
    .unwrap();
    let text = config.to_toml().unwrap();
    assert_eq!(EradConfig::from_toml(&text).unwrap(), config);
}
