//! Containers for the assets and hazards of one study.

mod asset_system;
mod hazard_system;

pub use asset_system::AssetSystem;
pub use hazard_system::HazardSystem;
