//! Shared constants for the ERAD fragility engine.

/// Name of the built-in fragility curve set.
pub const DEFAULT_CURVE_SET: &str = "DEFAULT_CURVES";

/// Property toggled on the backing component when an asset fails.
pub const IN_SERVICE_PROPERTY: &str = "in_service";

/// Prefix for Monte Carlo scenario names (`sample_0`, `sample_1`, ...).
pub const SCENARIO_NAME_PREFIX: &str = "sample_";

/// Default number of Monte Carlo trials.
pub const DEFAULT_NUMBER_OF_SAMPLES: u32 = 1;

/// Default run seed.
pub const DEFAULT_SEED: u64 = 42;

/// Metres per second to miles per hour.
pub const MPS_TO_MPH: f64 = 2.23694;

// ---- Darestani (2019) pole model bounds ----

/// Wind angle bounds in degrees.
pub const WIND_ANGLE_BOUNDS: (f64, f64) = (0.0, 90.0);

/// Conductor cross-sectional area bounds in square metres.
pub const CONDUCTOR_AREA_BOUNDS: (f64, f64) = (0.0, 8.0);

/// Pole age bounds in years.
pub const POLE_AGE_BOUNDS: (f64, f64) = (0.0, 100.0);

/// Wind speed support of the pole model, in metres per second.
pub const POLE_WIND_SPEED_SUPPORT: (f64, f64) = (2.0, 112.0);

/// Environment variable holding per-module log directives.
pub const LOG_ENV_VAR: &str = "ERAD_LOG";

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "erad.toml";
