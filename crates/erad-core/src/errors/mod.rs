//! Error handling for ERAD.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod covariate_error;
pub mod distribution_error;
pub mod error_code;
pub mod simulation_error;
pub mod unit_error;

pub use config_error::ConfigError;
pub use covariate_error::CovariateError;
pub use distribution_error::DistributionError;
pub use error_code::EradErrorCode;
pub use simulation_error::{RunReport, SimulationError};
pub use unit_error::UnitError;
