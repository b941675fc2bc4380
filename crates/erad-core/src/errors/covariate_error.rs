//! Regression fragility model construction errors.

use super::error_code::{self, EradErrorCode};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CovariateError {
    #[error("{field} must be provided for {model} distribution")]
    Missing { field: String, model: String },

    #[error("{field} out of range [{min}, {max}]: got {value}")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("No coefficients found for material {material}, {class}")]
    UnknownConfiguration { material: String, class: String },

    #[error("{parameter} must be positive, computed {value}")]
    DegenerateParameter { parameter: String, value: f64 },

    #[error("Covariate {field} has wrong units: {reason}")]
    InvalidUnits { field: String, reason: String },
}

impl EradErrorCode for CovariateError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Missing { .. } => error_code::MISSING_COVARIATE,
            Self::OutOfRange { .. } | Self::InvalidUnits { .. } => error_code::RANGE_ERROR,
            Self::UnknownConfiguration { .. } => error_code::UNKNOWN_CONFIGURATION,
            Self::DegenerateParameter { .. } => error_code::DEGENERATE_PARAMETER,
        }
    }
}
