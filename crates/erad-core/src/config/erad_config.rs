//! Top-level ERAD configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{SamplingConfig, SimulationConfig};
use crate::constants;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit run overrides (applied via `apply_run_overrides`)
/// 2. Environment variables (`ERAD_*`)
/// 3. Project config (`erad.toml` in project root)
/// 4. User config (`~/.erad/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct EradConfig {
    pub simulation: SimulationConfig,
    pub sampling: SamplingConfig,
}

/// Caller-supplied overrides, e.g. from a command line or a notebook.
#[derive(Debug, Clone, Default)]
pub struct RunOverrides {
    pub curve_set: Option<String>,
    pub number_of_samples: Option<u32>,
    pub seed: Option<u64>,
    pub parallel: Option<bool>,
}

impl EradConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&RunOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // User config (lowest file priority)
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(err @ ConfigError::ParseError { .. }) => return Err(err),
                    Err(err) => {
                        tracing::warn!(
                            path = %user_config_path.display(),
                            error = %err,
                            "ignoring unreadable user config"
                        );
                    }
                }
            }
        }

        let project_config_path = root.join(constants::PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config)?;

        if let Some(overrides) = overrides {
            Self::apply_run_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &EradConfig) -> Result<(), ConfigError> {
        if config.sampling.number_of_samples == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "sampling.number_of_samples".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(ref name) = config.simulation.curve_set {
            if name.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "simulation.curve_set".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` win.
    pub fn merge(base: &mut EradConfig, other: &EradConfig) {
        if other.simulation.curve_set.is_some() {
            base.simulation.curve_set = other.simulation.curve_set.clone();
        }
        if other.simulation.parallel.is_some() {
            base.simulation.parallel = other.simulation.parallel;
        }

        if other.sampling.number_of_samples.is_some() {
            base.sampling.number_of_samples = other.sampling.number_of_samples;
        }
        if other.sampling.seed.is_some() {
            base.sampling.seed = other.sampling.seed;
        }
        if other.sampling.parallel.is_some() {
            base.sampling.parallel = other.sampling.parallel;
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the user config path: `~/.erad/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".erad").join("config.toml"))
    }

    /// Unknown keys are ignored.
    fn merge_toml_file(config: &mut EradConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: EradConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        tracing::debug!(path = %path.display(), "merged config file");
        Ok(())
    }

    /// Pattern: `ERAD_SIMULATION_CURVE_SET`, `ERAD_SAMPLING_SEED`, etc.
    /// A set variable that does not parse is an error.
    fn apply_env_overrides(config: &mut EradConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("ERAD_SIMULATION_CURVE_SET") {
            config.simulation.curve_set = Some(val);
        }
        if let Some(v) = parse_env::<bool>("ERAD_SIMULATION_PARALLEL")? {
            config.simulation.parallel = Some(v);
        }
        if let Some(v) = parse_env::<u32>("ERAD_SAMPLING_NUMBER_OF_SAMPLES")? {
            config.sampling.number_of_samples = Some(v);
        }
        if let Some(v) = parse_env::<u64>("ERAD_SAMPLING_SEED")? {
            config.sampling.seed = Some(v);
        }
        Ok(())
    }

    fn apply_run_overrides(config: &mut EradConfig, overrides: &RunOverrides) {
        if let Some(ref v) = overrides.curve_set {
            config.simulation.curve_set = Some(v.clone());
        }
        if let Some(v) = overrides.number_of_samples {
            config.sampling.number_of_samples = Some(v);
        }
        if let Some(v) = overrides.seed {
            config.sampling.seed = Some(v);
        }
        if let Some(v) = overrides.parallel {
            config.simulation.parallel = Some(v);
            config.sampling.parallel = Some(v);
        }
    }
}

fn parse_env<T: std::str::FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(name) {
        Ok(val) => val
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                field: name.to_string(),
                message: format!("cannot parse '{val}'"),
            }),
        Err(_) => Ok(None),
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
