//! Structured span field names shared by the ERAD crates.
//!
//! Keep log queries stable by recording the same field names everywhere.

/// Simulator: number of distinct hazard timestamps processed.
pub const HAZARD_TIMESTAMPS: &str = "hazard_timestamps";

/// Simulator: number of hazard events processed.
pub const HAZARD_EVENTS: &str = "hazard_events";

/// Simulator/Scenario: number of assets in the system.
pub const ASSET_COUNT: &str = "asset_count";

/// Simulator: curve set name that was actually evaluated.
pub const CURVE_SET: &str = "curve_set";

/// Simulator: per-asset update failures collected in the run report.
pub const ASSET_FAILURES: &str = "asset_failures";

/// Scenario: number of Monte Carlo trials.
pub const TRIAL_COUNT: &str = "trial_count";

/// Scenario: total outage edits emitted across all trials.
pub const OUTAGE_COUNT: &str = "outage_count";

/// Simulator/Scenario: wall time of the stage in milliseconds.
pub const STAGE_DURATION_MS: &str = "stage_duration_ms";
