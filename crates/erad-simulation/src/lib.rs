//! # erad-simulation
//!
//! Hazard exposure simulation and Monte Carlo outage scenarios.
//! The simulator walks hazard events in time order and records a survival
//! probability per asset and timestamp; the scenario generator samples
//! those records into tracked `in_service = false` edits.

pub mod asset;
pub mod hazards;
pub mod scenario;
pub mod simulator;
pub mod systems;

pub use asset::{Asset, AssetState, HazardIntensities, SurvivalAsset};
pub use hazards::{HazardExposure, HazardModel};
pub use scenario::{PropertyEdit, ScenarioGenerator, ScenarioSummary, TrackedChange};
pub use simulator::{HazardSimulator, RunStats};
pub use systems::{AssetSystem, HazardSystem};
