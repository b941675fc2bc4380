//! Library-provided continuous families backed by `statrs`.
//!
//! Parameters follow the positional `shape..., loc, scale` convention used
//! by SciPy frozen distributions: `lognorm(s, loc, scale)` has
//! `cdf(x) = Φ(ln((x - loc) / scale) / s)`, `expon(loc, scale)` has
//! `cdf(x) = 1 - exp(-(x - loc) / scale)`, and so on. Omitted trailing
//! parameters default to `loc = 0`, `scale = 1`.

use std::fmt;
use std::str::FromStr;

use erad_core::errors::DistributionError;
use rand::RngCore;
use statrs::distribution::{ContinuousCDF, Exp, Gamma, LogNormal, Normal, Uniform, Weibull};

use crate::model::{open_unit, ContinuousModel};

/// Supported standard families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardFamily {
    Normal,
    LogNormal,
    Exponential,
    Gamma,
    Weibull,
    Uniform,
}

impl StandardFamily {
    pub const ALL: [StandardFamily; 6] = [
        Self::Normal,
        Self::LogNormal,
        Self::Exponential,
        Self::Gamma,
        Self::Weibull,
        Self::Uniform,
    ];

    /// Canonical (SciPy) name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Normal => "norm",
            Self::LogNormal => "lognorm",
            Self::Exponential => "expon",
            Self::Gamma => "gamma",
            Self::Weibull => "weibull_min",
            Self::Uniform => "uniform",
        }
    }

    /// Resolve a family by canonical name or long alias.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "norm" | "normal" => Some(Self::Normal),
            "lognorm" | "lognormal" => Some(Self::LogNormal),
            "expon" | "exponential" => Some(Self::Exponential),
            "gamma" => Some(Self::Gamma),
            "weibull_min" | "weibull" => Some(Self::Weibull),
            "uniform" => Some(Self::Uniform),
            _ => None,
        }
    }

    /// Number of leading shape parameters before `loc, scale`.
    pub fn shape_count(self) -> usize {
        match self {
            Self::LogNormal | Self::Gamma | Self::Weibull => 1,
            Self::Normal | Self::Exponential | Self::Uniform => 0,
        }
    }
}

impl fmt::Display for StandardFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StandardFamily {
    type Err = DistributionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| DistributionError::UnknownDistribution {
            name: s.to_string(),
        })
    }
}

#[derive(Debug, Clone)]
enum Kernel {
    Normal(Normal),
    LogNormal(LogNormal),
    Exponential(Exp),
    Gamma(Gamma),
    Weibull(Weibull),
    Uniform(Uniform),
}

impl Kernel {
    fn cdf(&self, x: f64) -> f64 {
        match self {
            Self::Normal(d) => d.cdf(x),
            Self::LogNormal(d) => d.cdf(x),
            Self::Exponential(d) => d.cdf(x),
            Self::Gamma(d) => d.cdf(x),
            Self::Weibull(d) => d.cdf(x),
            Self::Uniform(d) => d.cdf(x),
        }
    }

    fn inverse_cdf(&self, p: f64) -> f64 {
        match self {
            Self::Normal(d) => d.inverse_cdf(p),
            Self::LogNormal(d) => d.inverse_cdf(p),
            Self::Exponential(d) => d.inverse_cdf(p),
            Self::Gamma(d) => d.inverse_cdf(p),
            Self::Weibull(d) => d.inverse_cdf(p),
            Self::Uniform(d) => d.inverse_cdf(p),
        }
    }
}

/// A frozen standard distribution.
#[derive(Debug, Clone)]
pub struct StandardDistribution {
    family: StandardFamily,
    shape: Option<f64>,
    loc: f64,
    scale: f64,
    /// `loc` for kernels supported on the positive half-line, which `statrs`
    /// parameterises without a location.
    shift: Option<f64>,
    kernel: Kernel,
}

impl StandardDistribution {
    /// Freeze `family` with positional `params`.
    pub fn new(family: StandardFamily, params: &[f64]) -> Result<Self, DistributionError> {
        let shapes = family.shape_count();
        let invalid = |reason: String| DistributionError::InvalidParameters {
            family: family.name().to_string(),
            reason,
        };

        if params.len() > shapes + 2 {
            return Err(invalid(format!(
                "expected at most {} parameters, got {}",
                shapes + 2,
                params.len()
            )));
        }
        if params.len() < shapes {
            return Err(invalid("missing shape parameter".to_string()));
        }
        if let Some(bad) = params.iter().find(|p| !p.is_finite()) {
            return Err(invalid(format!("parameters must be finite, got {bad}")));
        }

        let shape = (shapes == 1).then(|| params[0]);
        let loc = params.get(shapes).copied().unwrap_or(0.0);
        let scale = params.get(shapes + 1).copied().unwrap_or(1.0);
        if scale <= 0.0 {
            return Err(invalid(format!("scale must be positive, got {scale}")));
        }
        let shape_value = shape.unwrap_or(1.0);

        let (kernel, shift) = match family {
            StandardFamily::Normal => (
                Normal::new(loc, scale).map(Kernel::Normal).map_err(|e| invalid(e.to_string()))?,
                None,
            ),
            StandardFamily::LogNormal => (
                LogNormal::new(scale.ln(), shape_value)
                    .map(Kernel::LogNormal)
                    .map_err(|e| invalid(e.to_string()))?,
                Some(loc),
            ),
            StandardFamily::Exponential => (
                Exp::new(1.0 / scale)
                    .map(Kernel::Exponential)
                    .map_err(|e| invalid(e.to_string()))?,
                Some(loc),
            ),
            StandardFamily::Gamma => (
                Gamma::new(shape_value, 1.0 / scale)
                    .map(Kernel::Gamma)
                    .map_err(|e| invalid(e.to_string()))?,
                Some(loc),
            ),
            StandardFamily::Weibull => (
                Weibull::new(shape_value, scale)
                    .map(Kernel::Weibull)
                    .map_err(|e| invalid(e.to_string()))?,
                Some(loc),
            ),
            StandardFamily::Uniform => (
                Uniform::new(loc, loc + scale)
                    .map(Kernel::Uniform)
                    .map_err(|e| invalid(e.to_string()))?,
                None,
            ),
        };

        Ok(Self {
            family,
            shape,
            loc,
            scale,
            shift,
            kernel,
        })
    }

    /// Freeze a family looked up by name.
    pub fn from_name(name: &str, params: &[f64]) -> Result<Self, DistributionError> {
        Self::new(name.parse()?, params)
    }

    pub fn family(&self) -> StandardFamily {
        self.family
    }

    pub fn shape(&self) -> Option<f64> {
        self.shape
    }

    pub fn loc(&self) -> f64 {
        self.loc
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl ContinuousModel for StandardDistribution {
    fn name(&self) -> &str {
        self.family.name()
    }

    fn cdf(&self, x: f64) -> f64 {
        let z = match self.shift {
            Some(loc) if x - loc <= 0.0 => return 0.0,
            Some(loc) => x - loc,
            None => x,
        };
        self.kernel.cdf(z).clamp(0.0, 1.0)
    }

    fn sample(&self, rng: &mut dyn RngCore) -> Result<f64, DistributionError> {
        let u = open_unit(rng);
        Ok(self.kernel.inverse_cdf(u) + self.shift.unwrap_or(0.0))
    }
}
