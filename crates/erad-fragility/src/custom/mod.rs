//! Custom regression-parameterised distributions.
//!
//! Custom models are frozen per asset from that asset's covariates, unlike
//! standard families which are frozen once per curve.

pub mod coefficients;
pub mod covariates;
pub mod darestani;

use erad_core::errors::DistributionError;
use rand::RngCore;

pub use coefficients::{darestani2019_coefficients, PoleCoefficients};
pub use covariates::PoleCovariates;
pub use darestani::{Darestani2019, DARESTANI_2019};

use crate::model::ContinuousModel;

/// Names of every registered custom distribution.
const CUSTOM_DISTRIBUTIONS: &[&str] = &[DARESTANI_2019];

/// List available custom distributions.
pub fn list_custom_distributions() -> Vec<&'static str> {
    CUSTOM_DISTRIBUTIONS.to_vec()
}

/// True if `name` refers to a registered custom distribution.
pub fn is_custom_distribution(name: &str) -> bool {
    CUSTOM_DISTRIBUTIONS.contains(&name)
}

/// Build a registered custom distribution by name.
pub fn custom_distribution_by_name(
    name: &str,
    covariates: &PoleCovariates,
) -> Result<CustomDistribution, DistributionError> {
    match name {
        DARESTANI_2019 => Ok(CustomDistribution::Darestani2019(Darestani2019::new(
            covariates,
        )?)),
        _ => Err(DistributionError::UnknownDistribution {
            name: name.to_string(),
        }),
    }
}

/// A frozen custom distribution.
#[derive(Debug, Clone)]
pub enum CustomDistribution {
    Darestani2019(Darestani2019),
}

impl ContinuousModel for CustomDistribution {
    fn name(&self) -> &str {
        match self {
            Self::Darestani2019(m) => m.name(),
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        match self {
            Self::Darestani2019(m) => m.cdf(x),
        }
    }

    fn sample(&self, rng: &mut dyn RngCore) -> Result<f64, DistributionError> {
        match self {
            Self::Darestani2019(m) => m.sample(rng),
        }
    }
}

impl From<Darestani2019> for CustomDistribution {
    fn from(model: Darestani2019) -> Self {
        Self::Darestani2019(model)
    }
}
