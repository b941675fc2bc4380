//! Monte Carlo outage scenarios sampled from recorded survival probabilities.

mod generator;
mod summary;
mod tracked_change;

pub use generator::{scenario_name, ScenarioGenerator};
pub use summary::{AssetOutageSummary, ScenarioSummary};
pub use tracked_change::{PropertyEdit, TrackedChange};
