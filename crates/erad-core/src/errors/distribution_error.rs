//! Distribution adapter errors.

use super::error_code::{self, EradErrorCode};
use super::{CovariateError, UnitError};

/// Errors raised while building or evaluating a probability model.
///
/// Everything except `IncompatibleUnits` and `UnsupportedOperation` is a
/// construction-time configuration error. `Covariate` keeps the code of the
/// wrapped covariate error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DistributionError {
    #[error("Distribution {family} needs at least one quantity parameter")]
    NoQuantityParameter { family: String },

    #[error("Distribution {family} mixes units: expected {expected}, found {found}")]
    MismatchedUnits {
        family: String,
        expected: String,
        found: String,
    },

    #[error("Unsupported distribution: {name}")]
    UnknownDistribution { name: String },

    #[error("Invalid parameters for {family}: {reason}")]
    InvalidParameters { family: String, reason: String },

    #[error("Value incompatible with distribution units: {0}")]
    IncompatibleUnits(#[from] UnitError),

    #[error("{operation} is not supported by {family}")]
    UnsupportedOperation { operation: String, family: String },

    #[error("Custom distribution rejected its covariates: {0}")]
    Covariate(#[from] CovariateError),
}

impl DistributionError {
    /// True for errors that reject the distribution definition itself.
    pub fn is_configuration_error(&self) -> bool {
        !matches!(
            self,
            Self::IncompatibleUnits(_) | Self::UnsupportedOperation { .. }
        )
    }
}

impl EradErrorCode for DistributionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::IncompatibleUnits(e) => e.error_code(),
            Self::Covariate(e) => e.error_code(),
            Self::UnsupportedOperation { .. } => error_code::UNSUPPORTED_OPERATION,
            _ => error_code::CONFIGURATION_ERROR,
        }
    }
}
