//! Configuration system for ERAD.
//! TOML-based, layered resolution: overrides > env > project > user > defaults.

pub mod erad_config;
pub mod sampling_config;
pub mod simulation_config;

pub use erad_config::{EradConfig, RunOverrides};
pub use sampling_config::SamplingConfig;
pub use simulation_config::SimulationConfig;
