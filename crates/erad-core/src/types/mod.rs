//! Closed enumerations and identifier types shared across ERAD.

pub mod asset_type;
pub mod hazard;
pub mod identifiers;
pub mod pole;

pub use asset_type::AssetType;
pub use hazard::{HazardKind, HazardMeasure};
pub use identifiers::{BusId, ComponentId};
pub use pole::{PoleClass, PoleMaterial};
