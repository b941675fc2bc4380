//! The closed set of distribution kinds a probability model can wrap.

use std::fmt;
use std::sync::Arc;

use erad_core::errors::DistributionError;
use rand::RngCore;

use crate::custom::CustomDistribution;
use crate::model::ContinuousModel;
use crate::standard::StandardDistribution;

type CdfFn = dyn Fn(f64) -> f64 + Send + Sync;

/// A bare CDF with no sampler.
#[derive(Clone)]
pub struct CallableCdf {
    name: String,
    cdf: Arc<CdfFn>,
}

impl CallableCdf {
    pub fn new(name: impl Into<String>, cdf: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self {
            name: name.into(),
            cdf: Arc::new(cdf),
        }
    }
}

impl fmt::Debug for CallableCdf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallableCdf")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl ContinuousModel for CallableCdf {
    fn name(&self) -> &str {
        &self.name
    }

    fn cdf(&self, x: f64) -> f64 {
        let p = (self.cdf)(x);
        if p.is_nan() {
            0.0
        } else {
            p.clamp(0.0, 1.0)
        }
    }

    fn sample(&self, _rng: &mut dyn RngCore) -> Result<f64, DistributionError> {
        Err(DistributionError::UnsupportedOperation {
            operation: "sample".to_string(),
            family: self.name.clone(),
        })
    }
}

/// Standard family, custom regression model, or bare callable.
#[derive(Debug, Clone)]
pub enum Distribution {
    Standard(StandardDistribution),
    Custom(CustomDistribution),
    Callable(CallableCdf),
}

impl Distribution {
    fn model(&self) -> &dyn ContinuousModel {
        match self {
            Self::Standard(d) => d,
            Self::Custom(d) => d,
            Self::Callable(d) => d,
        }
    }
}

impl ContinuousModel for Distribution {
    fn name(&self) -> &str {
        self.model().name()
    }

    fn cdf(&self, x: f64) -> f64 {
        self.model().cdf(x)
    }

    fn sample(&self, rng: &mut dyn RngCore) -> Result<f64, DistributionError> {
        self.model().sample(rng)
    }
}

impl From<StandardDistribution> for Distribution {
    fn from(d: StandardDistribution) -> Self {
        Self::Standard(d)
    }
}

impl From<CustomDistribution> for Distribution {
    fn from(d: CustomDistribution) -> Self {
        Self::Custom(d)
    }
}

impl From<CallableCdf> for Distribution {
    fn from(d: CallableCdf) -> Self {
        Self::Callable(d)
    }
}
