//! Simulation errors and non-fatal error collection.

use super::error_code::{self, EradErrorCode};
use super::{ConfigError, CovariateError, DistributionError, UnitError};

/// Errors that can occur during exposure simulation or scenario sampling.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    #[error("Invalid argument {name}: {reason}")]
    InvalidArgument { name: String, reason: String },

    #[error("Distribution error: {0}")]
    Distribution(#[from] DistributionError),

    #[error("Covariate error: {0}")]
    Covariate(#[from] CovariateError),

    #[error("Unit error: {0}")]
    Unit(#[from] UnitError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Asset {asset} failed to update at {timestamp}: {source}")]
    AssetUpdate {
        asset: String,
        timestamp: String,
        source: Box<SimulationError>,
    },
}

impl SimulationError {
    /// Wrap an error raised while updating one asset.
    pub fn asset_update(
        asset: impl Into<String>,
        timestamp: impl ToString,
        source: SimulationError,
    ) -> Self {
        Self::AssetUpdate {
            asset: asset.into(),
            timestamp: timestamp.to_string(),
            source: Box::new(source),
        }
    }
}

impl EradErrorCode for SimulationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => error_code::INVALID_ARGUMENT,
            Self::Distribution(e) => e.error_code(),
            Self::Covariate(e) => e.error_code(),
            Self::Unit(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::AssetUpdate { .. } => error_code::ASSET_UPDATE_FAILED,
        }
    }
}

/// Result of a batch run that accumulates non-fatal errors and warnings.
/// Allows partial results to be returned even when some assets fail.
#[derive(Debug, Default)]
pub struct RunReport<T: Default = ()> {
    /// The successful result data.
    pub data: T,
    /// Non-fatal errors collected during the run.
    pub errors: Vec<SimulationError>,
    /// Recoverable conditions (e.g. curve-set fallback).
    pub warnings: Vec<String>,
}

impl<T: Default> RunReport<T> {
    /// Create a new report around `data`.
    pub fn new(data: T) -> Self {
        Self {
            data,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Add a non-fatal error.
    pub fn add_error(&mut self, error: SimulationError) {
        self.errors.push(error);
    }

    /// Add a recoverable warning.
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Returns true if there are no non-fatal errors.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of non-fatal errors.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Transform the data while keeping collected errors and warnings.
    pub fn map<U: Default>(self, f: impl FnOnce(T) -> U) -> RunReport<U> {
        RunReport {
            data: f(self.data),
            errors: self.errors,
            warnings: self.warnings,
        }
    }
}
