//! Unit-aware probability models.
//!
//! A [`ProbabilityModel`] pairs a [`Distribution`] with its positional
//! parameters. At least one parameter must be a [`Quantity`], and every
//! quantity must carry the same unit: that unit is the model's native unit.
//! Evaluations convert the query into the native unit first and samples come
//! back in it.

use std::borrow::Cow;
use std::sync::OnceLock;

use erad_core::errors::DistributionError;
use erad_core::units::{Quantity, Unit};
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::custom::{self, CustomDistribution, PoleCovariates};
use crate::distribution::{CallableCdf, Distribution};
use crate::model::ContinuousModel;
use crate::standard::StandardDistribution;

/// One positional distribution parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Parameter {
    Quantity(Quantity),
    Scalar(f64),
}

impl Parameter {
    /// Magnitude as written, without any unit conversion.
    pub fn magnitude(&self) -> f64 {
        match self {
            Self::Quantity(q) => q.value,
            Self::Scalar(v) => *v,
        }
    }

    pub fn quantity(&self) -> Option<&Quantity> {
        match self {
            Self::Quantity(q) => Some(q),
            Self::Scalar(_) => None,
        }
    }
}

impl From<Quantity> for Parameter {
    fn from(q: Quantity) -> Self {
        Self::Quantity(q)
    }
}

impl From<f64> for Parameter {
    fn from(v: f64) -> Self {
        Self::Scalar(v)
    }
}

/// Determine the native unit of a parameter list.
pub fn native_unit(family: &str, parameters: &[Parameter]) -> Result<Unit, DistributionError> {
    let mut quantities = parameters.iter().filter_map(Parameter::quantity);
    let first = quantities
        .next()
        .ok_or_else(|| DistributionError::NoQuantityParameter {
            family: family.to_string(),
        })?;
    if let Some(other) = quantities.find(|q| q.unit != first.unit) {
        return Err(DistributionError::MismatchedUnits {
            family: family.to_string(),
            expected: first.unit.to_string(),
            found: other.unit.to_string(),
        });
    }
    Ok(first.unit)
}

/// A built, immutable distribution adapter.
#[derive(Debug, Clone)]
pub struct ProbabilityModel {
    distribution: Distribution,
    parameters: Vec<Parameter>,
    unit: Unit,
}

impl ProbabilityModel {
    /// Build a standard family (`"norm"`, `"lognorm"`, `"expon"`, ...) from
    /// positional parameters.
    pub fn standard(family: &str, parameters: Vec<Parameter>) -> Result<Self, DistributionError> {
        let unit = native_unit(family, &parameters)?;
        let magnitudes: Vec<f64> = parameters.iter().map(Parameter::magnitude).collect();
        let distribution = StandardDistribution::from_name(family, &magnitudes)?.into();
        Ok(Self {
            distribution,
            parameters,
            unit,
        })
    }

    /// Wrap an already frozen custom distribution. `parameters` only fix the
    /// native unit.
    pub fn custom(
        distribution: CustomDistribution,
        parameters: Vec<Parameter>,
    ) -> Result<Self, DistributionError> {
        let unit = native_unit(distribution.name(), &parameters)?;
        Ok(Self {
            distribution: distribution.into(),
            parameters,
            unit,
        })
    }

    /// Wrap a bare CDF. Such models evaluate but cannot sample.
    pub fn callable(cdf: CallableCdf, parameters: Vec<Parameter>) -> Result<Self, DistributionError> {
        let unit = native_unit(cdf.name(), &parameters)?;
        Ok(Self {
            distribution: cdf.into(),
            parameters,
            unit,
        })
    }

    /// Dispatch on the family name: standard families are frozen from the
    /// parameters, custom ones from `covariates`.
    pub fn build(
        family: &str,
        parameters: Vec<Parameter>,
        covariates: Option<&PoleCovariates>,
    ) -> Result<Self, DistributionError> {
        if custom::is_custom_distribution(family) {
            let covariates = covariates.copied().unwrap_or_default();
            let unit = native_unit(family, &parameters)?;
            let distribution = custom::custom_distribution_by_name(family, &covariates)?;
            return Ok(Self {
                distribution: distribution.into(),
                parameters,
                unit,
            });
        }
        Self::standard(family, parameters)
    }

    /// Probability of failure at or below `value`, in `[0, 1]`.
    pub fn probability(&self, value: &Quantity) -> Result<f64, DistributionError> {
        let x = value.magnitude_in(self.unit)?;
        if x.is_nan() {
            return Err(DistributionError::InvalidParameters {
                family: self.distribution.name().to_string(),
                reason: "cannot evaluate at NaN".to_string(),
            });
        }
        Ok(self.distribution.cdf(x).clamp(0.0, 1.0))
    }

    /// Draw one value in the native unit.
    pub fn sample(&self, rng: &mut dyn RngCore) -> Result<Quantity, DistributionError> {
        Ok(Quantity::new(self.distribution.sample(rng)?, self.unit))
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn distribution(&self) -> &Distribution {
        &self.distribution
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Parameter magnitudes as passed to the underlying family.
    pub fn magnitudes(&self) -> Vec<f64> {
        self.parameters.iter().map(Parameter::magnitude).collect()
    }
}

/// Declarative distribution: family name plus parameters. The model is
/// built on first use and cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbabilityFunction {
    pub distribution: String,
    pub parameters: Vec<Parameter>,
    #[serde(skip)]
    model: OnceLock<Result<ProbabilityModel, DistributionError>>,
}

impl ProbabilityFunction {
    pub fn new(distribution: impl Into<String>, parameters: Vec<Parameter>) -> Self {
        Self {
            distribution: distribution.into(),
            parameters,
            model: OnceLock::new(),
        }
    }

    /// `norm(1.5 m/s, 2)`.
    pub fn example() -> Self {
        Self::new(
            "norm",
            vec![Quantity::new(1.5, Unit::MeterPerSecond).into(), 2.0.into()],
        )
    }

    /// True if the family is a custom model that needs per-asset covariates.
    pub fn is_custom(&self) -> bool {
        custom::is_custom_distribution(&self.distribution)
    }

    /// The cached model of a standard family.
    ///
    /// Custom families have no covariate-free model; use
    /// [`Self::model_for`] for them.
    pub fn model(&self) -> Result<&ProbabilityModel, DistributionError> {
        self.model
            .get_or_init(|| ProbabilityModel::standard(&self.distribution, self.parameters.clone()))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// A model frozen for one asset. Standard families ignore `covariates`
    /// and borrow the cached model.
    pub fn model_for(
        &self,
        covariates: Option<&PoleCovariates>,
    ) -> Result<Cow<'_, ProbabilityModel>, DistributionError> {
        if self.is_custom() {
            ProbabilityModel::build(&self.distribution, self.parameters.clone(), covariates)
                .map(Cow::Owned)
        } else {
            self.model().map(Cow::Borrowed)
        }
    }

    /// Native unit of the declared parameters.
    pub fn unit(&self) -> Result<Unit, DistributionError> {
        native_unit(&self.distribution, &self.parameters)
    }

    /// Check the declaration without needing covariates.
    pub fn validate(&self) -> Result<(), DistributionError> {
        if self.is_custom() {
            self.unit().map(|_| ())
        } else {
            self.model().map(|_| ())
        }
    }

    pub fn probability(&self, value: &Quantity) -> Result<f64, DistributionError> {
        self.model()?.probability(value)
    }

    pub fn sample(&self, rng: &mut dyn RngCore) -> Result<Quantity, DistributionError> {
        self.model()?.sample(rng)
    }
}

impl PartialEq for ProbabilityFunction {
    fn eq(&self, other: &Self) -> bool {
        self.distribution == other.distribution && self.parameters == other.parameters
    }
}
