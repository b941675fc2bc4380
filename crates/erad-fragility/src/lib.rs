//! # erad-fragility
//!
//! Unit-aware fragility evaluation: standard and custom continuous
//! distributions, probability adapters, fragility curve collections, the
//! built-in default curve set, and curve set registries.

pub mod curves;
pub mod custom;
pub mod defaults;
pub mod distribution;
pub mod model;
pub mod probability;
pub mod registry;
pub mod standard;

pub use curves::{FragilityCurve, HazardFragilityCurves};
pub use custom::{
    custom_distribution_by_name, list_custom_distributions, CustomDistribution, Darestani2019,
    PoleCovariates,
};
pub use defaults::DEFAULT_CURVES;
pub use distribution::{CallableCdf, Distribution};
pub use model::ContinuousModel;
pub use probability::{Parameter, ProbabilityFunction, ProbabilityModel};
pub use registry::{load_curve_sets_toml, CurveRegistry, CurveSet, ResolvedCurves};
pub use standard::{StandardDistribution, StandardFamily};
