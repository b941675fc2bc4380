//! # erad-core
//!
//! Foundation crate for the ERAD fragility engine.
//! Defines units and quantities, asset and hazard enums, identifiers,
//! errors, config, tracing setup, and constants. Every other crate in the
//! workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;
pub mod units;

pub use config::EradConfig;
pub use errors::{
    ConfigError, CovariateError, DistributionError, EradErrorCode, RunReport, SimulationError,
    UnitError,
};
pub use types::{AssetType, ComponentId, HazardKind, HazardMeasure, PoleClass, PoleMaterial};
pub use units::{Dimension, Quantity, Unit};
